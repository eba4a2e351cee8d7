//! Tabs: condition-based client-side row filters with badge counts.
//!
//! A [`TabSpec`] pairs a label with a predicate on one field. A [`TabSet`]
//! derives a stable key for every tab once, answers key lookups and counts
//! matching rows per tab. Who owns the active key is chosen once through
//! [`TabControl`].

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tabledata_seeker::{Clause, Condition, Operand, Predicate, Value};

/// Describes one tab.
///
/// ```
/// use tabledata::{Condition, TabSpec};
///
/// let ativos = TabSpec::new("Ativos").field("ativo").condition(Condition::Equal).value(true);
/// assert_eq!(ativos.key_at(0), "0:ativo:Ativos");
/// assert_eq!(ativos.tab_key("ativos").key_at(0), "ativos");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabSpec {
    /// Explicit key; when absent one is derived from index, name and label.
    pub tab_key: Option<String>,
    /// Field the condition reads.
    pub name: Option<String>,
    pub label: String,
    pub condition: Condition,
    pub value: Operand,
}

impl TabSpec {
    pub fn new(label: impl Into<String>) -> Self {
        TabSpec {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn tab_key(mut self, key: impl Into<String>) -> Self {
        self.tab_key = Some(key.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn value(mut self, value: impl Into<Operand>) -> Self {
        self.value = value.into();
        self
    }

    /// The key this tab gets at position `index`.
    ///
    /// An explicit non-empty `tab_key` wins; otherwise the key is
    /// `"{index}:{name}:{label}"` with `all` and `tab` standing in for a
    /// missing name or label.
    pub fn key_at(&self, index: usize) -> String {
        match self.tab_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => {
                let name = self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("all");
                let label = if self.label.is_empty() { "tab" } else { &self.label };
                format!("{}:{}:{}", index, name, label)
            }
        }
    }

    /// The clause this tab applies to rows.
    pub fn clause(&self) -> Clause {
        Clause {
            field: self.name.clone(),
            predicate: Predicate {
                condition: self.condition,
                operand: self.value.clone(),
            },
        }
    }
}

/// Filters `rows` through `tab`'s condition.
///
/// No tab, `Condition::All` or a tab without a field keep every row. If the
/// accessor panics, every row is returned unfiltered.
pub fn apply_tab_filter<'r, R, F>(rows: &'r [R], tab: Option<&TabSpec>, accessor: F) -> Vec<&'r R>
where
    for<'a> F: Fn(&'a R, &str) -> Value<'a>,
{
    match tab {
        Some(tab) => tab.clause().filter(rows, accessor),
        None => rows.iter().collect(),
    }
}

/// Number of rows a tab matches, for its badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabCount {
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// An ordered set of tabs with their derived keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabSet {
    tabs: Vec<TabSpec>,
    keys: Vec<String>,
}

impl TabSet {
    pub fn new(tabs: Vec<TabSpec>) -> Self {
        let keys: Vec<String> = tabs.iter().enumerate().map(|(i, t)| t.key_at(i)).collect();
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                tracing::warn!(key = %key, index = i, "duplicate tab key, lookups resolve to the first tab");
            }
        }
        TabSet { tabs, keys }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn tabs(&self) -> &[TabSpec] {
        &self.tabs
    }

    pub fn first_key(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&TabSpec> {
        self.index_of(key).map(|i| &self.tabs[i])
    }

    /// Iterates `(key, tab)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TabSpec)> {
        self.keys.iter().map(String::as_str).zip(self.tabs.iter())
    }

    /// Rows visible under `key`. An unknown key filters nothing.
    pub fn filter<'r, R, F>(&self, rows: &'r [R], key: Option<&str>, accessor: F) -> Vec<&'r R>
    where
        for<'a> F: Fn(&'a R, &str) -> Value<'a>,
    {
        let tab = key.and_then(|k| self.get(k));
        apply_tab_filter(rows, tab, accessor)
    }

    /// Badge counts for every tab, computed over the full dataset.
    pub fn counts<R, F>(&self, rows: &[R], accessor: F) -> Vec<TabCount>
    where
        for<'a> F: Fn(&'a R, &str) -> Value<'a>,
    {
        self.iter()
            .map(|(key, tab)| TabCount {
                key: key.to_string(),
                label: tab.label.clone(),
                count: apply_tab_filter(rows, Some(tab), &accessor).len(),
            })
            .collect()
    }
}

/// Callback notified when a controlled table's tab selection changes.
pub type TabChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Who owns the active tab key.
#[derive(Clone, Default)]
pub enum TabControl {
    /// The table stores the active key itself.
    #[default]
    Owned,
    /// The caller stores the active key; selections are reported through
    /// `on_change` and pushed back with `set_active_key`.
    Controlled {
        active: String,
        on_change: TabChangeHandler,
    },
}

impl TabControl {
    pub fn controlled<F>(active: impl Into<String>, on_change: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        TabControl::Controlled {
            active: active.into(),
            on_change: Arc::new(on_change),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, TabControl::Controlled { .. })
    }
}

impl fmt::Debug for TabControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabControl::Owned => f.write_str("Owned"),
            TabControl::Controlled { active, .. } => f
                .debug_struct("Controlled")
                .field("active", active)
                .finish_non_exhaustive(),
        }
    }
}

/// Active-tab state under one [`TabControl`] policy.
#[derive(Debug, Clone)]
pub(crate) struct TabState {
    control: TabControl,
    owned: Option<String>,
}

impl TabState {
    pub(crate) fn new(control: TabControl, tabs: &TabSet, default_tab: Option<String>) -> Self {
        let owned = match &control {
            TabControl::Owned => default_tab.or_else(|| tabs.first_key().map(str::to_string)),
            TabControl::Controlled { .. } => None,
        };
        TabState { control, owned }
    }

    pub(crate) fn active(&self) -> Option<&str> {
        match &self.control {
            TabControl::Owned => self.owned.as_deref(),
            TabControl::Controlled { active, .. } => Some(active.as_str()),
        }
    }

    pub(crate) fn select(&mut self, key: &str) {
        match &self.control {
            TabControl::Owned => {
                tracing::debug!(key, "tab selected");
                self.owned = Some(key.to_string());
            }
            TabControl::Controlled { on_change, .. } => {
                tracing::debug!(key, "tab selection requested");
                on_change(key);
            }
        }
    }

    /// Pushes a new key from the caller. Owned tables just store it.
    pub(crate) fn set_active_key(&mut self, key: &str) {
        match &mut self.control {
            TabControl::Owned => self.owned = Some(key.to_string()),
            TabControl::Controlled { active, .. } => *active = key.to_string(),
        }
    }

    pub(crate) fn control(&self) -> &TabControl {
        &self.control
    }
}
