//! Server filter form.
//!
//! Server filters are never evaluated locally. The form keeps one string per
//! filter and packages the non-blank ones into [`FilterItem`]s plus
//! `f=field|CONDITION|value` query parameters for the caller to send.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tabledata_seeker::Condition;

/// Default title of the filter form.
pub const DEFAULT_FILTERS_TITLE: &str = "Filtros";

/// Query parameter key carrying each filter.
pub const FILTER_PARAM: &str = "f";

fn default_trim() -> bool {
    true
}

/// Describes one server-side filter input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Field key sent to the server.
    pub name: String,
    pub label: String,
    /// Operator sent to the server; not evaluated locally.
    #[serde(default)]
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Trim surrounding whitespace before deciding blankness (default `true`).
    #[serde(default = "default_trim")]
    pub trim: bool,
}

impl FilterSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, condition: Condition) -> Self {
        FilterSpec {
            name: name.into(),
            label: label.into(),
            condition,
            placeholder: None,
            default_value: None,
            trim: true,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Keeps surrounding whitespace in submitted values.
    pub fn keep_whitespace(mut self) -> Self {
        self.trim = false;
        self
    }

    fn initial_value(&self) -> String {
        self.default_value.clone().unwrap_or_default()
    }
}

/// One submitted filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub field: String,
    pub condition: Condition,
    pub value: String,
}

impl FilterItem {
    /// The `field|CONDITION|value` form used in query parameters.
    pub fn to_param(&self) -> String {
        format!("{}|{}|{}", self.field, self.condition.code(), self.value)
    }
}

/// Ordered multi-map of query parameters.
///
/// ```
/// use tabledata::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.append("f", "nome|LIKE|Ana Maria");
/// params.append("f", "ativo|EQUAL|true");
/// assert_eq!(params.get_all("f"), vec!["nome|LIKE|Ana Maria", "ativo|EQUAL|true"]);
/// assert_eq!(
///     params.to_query_string(),
///     "f=nome%7CLIKE%7CAna%20Maria&f=ativo%7CEQUAL%7Ctrue"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encodes keys and values and joins pairs with `&`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// What a submit or clear hands to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerFilterChange {
    pub filters: Vec<FilterItem>,
    pub params: QueryParams,
}

impl ServerFilterChange {
    pub fn from_items(filters: Vec<FilterItem>) -> Self {
        let mut params = QueryParams::new();
        for item in &filters {
            params.append(FILTER_PARAM, item.to_param());
        }
        ServerFilterChange { filters, params }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Callback receiving every submitted or cleared filter change.
pub type ServerFilterHandler = Arc<dyn Fn(&ServerFilterChange) + Send + Sync>;

/// In-progress filter values, one string per [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    title: String,
    specs: Vec<FilterSpec>,
    values: Vec<String>,
}

impl FilterForm {
    pub fn new(specs: Vec<FilterSpec>) -> Self {
        let values = specs.iter().map(FilterSpec::initial_value).collect();
        FilterForm {
            title: DEFAULT_FILTERS_TITLE.to_string(),
            specs,
            values,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn specs(&self) -> &[FilterSpec] {
        &self.specs
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Replaces the filter set and resets every value to its default.
    pub fn set_filters(&mut self, specs: Vec<FilterSpec>) {
        self.values = specs.iter().map(FilterSpec::initial_value).collect();
        self.specs = specs;
    }

    /// Updates one value. Returns `false` for an unknown filter name.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.specs.iter().position(|s| s.name == name) {
            Some(i) => {
                self.values[i] = value.into();
                tracing::debug!(filter = name, "filter value updated");
                true
            }
            None => {
                tracing::debug!(filter = name, "ignoring value for unknown filter");
                false
            }
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.specs
            .iter()
            .position(|s| s.name == name)
            .map(|i| self.values[i].as_str())
    }

    /// Number of filters that would be submitted right now.
    pub fn active_count(&self) -> usize {
        self.build_items().len()
    }

    /// Values in filter order, trimmed unless the filter opts out. Empty
    /// values are dropped.
    pub fn build_items(&self) -> Vec<FilterItem> {
        self.specs
            .iter()
            .zip(&self.values)
            .filter_map(|(spec, raw)| {
                let value = if spec.trim { raw.trim() } else { raw.as_str() };
                if value.is_empty() {
                    return None;
                }
                Some(FilterItem {
                    field: spec.name.clone(),
                    condition: spec.condition,
                    value: value.to_string(),
                })
            })
            .collect()
    }

    pub fn submit(&self) -> ServerFilterChange {
        let change = ServerFilterChange::from_items(self.build_items());
        tracing::debug!(filters = change.filters.len(), "server filters submitted");
        change
    }

    /// Resets every value to its default and returns an empty change.
    pub fn clear(&mut self) -> ServerFilterChange {
        self.values = self.specs.iter().map(FilterSpec::initial_value).collect();
        tracing::debug!("server filters cleared");
        ServerFilterChange::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FilterForm {
        FilterForm::new(vec![
            FilterSpec::new("nome", "Nome", Condition::Like).placeholder("Buscar por nome"),
            FilterSpec::new("email", "E-mail", Condition::Equal),
            FilterSpec::new("cidade", "Cidade", Condition::StartsWith).default_value("São"),
        ])
    }

    #[test]
    fn initial_values_from_defaults() {
        let form = form();
        assert_eq!(form.value("nome"), Some(""));
        assert_eq!(form.value("cidade"), Some("São"));
        assert_eq!(form.value("nope"), None);
        assert_eq!(form.title(), "Filtros");
    }

    #[test]
    fn blank_values_are_omitted_and_values_trimmed() {
        let mut form = form();
        assert!(form.set_value("nome", "  Ana "));
        assert!(form.set_value("email", "   "));
        assert!(form.set_value("cidade", ""));
        assert!(!form.set_value("cpf", "123"));

        let items = form.build_items();
        assert_eq!(
            items,
            vec![FilterItem {
                field: "nome".into(),
                condition: Condition::Like,
                value: "Ana".into(),
            }]
        );
    }

    #[test]
    fn keep_whitespace_preserves_value() {
        let mut form = FilterForm::new(vec![
            FilterSpec::new("codigo", "Código", Condition::EndsWith).keep_whitespace()
        ]);
        form.set_value("codigo", " 01 ");
        assert_eq!(form.build_items()[0].value, " 01 ");
        form.set_value("codigo", "   ");
        assert_eq!(form.build_items()[0].value, "   ");
        form.set_value("codigo", "");
        assert!(form.build_items().is_empty());
    }

    #[test]
    fn submit_builds_params() {
        let mut form = form();
        form.set_value("nome", "Ana");
        let change = form.submit();
        assert_eq!(change.filters.len(), 2);
        assert_eq!(
            change.params.get_all("f"),
            vec!["nome|LIKE|Ana", "cidade|STARTS_WITH|São"]
        );
        assert_eq!(
            change.params.to_query_string(),
            "f=nome%7CLIKE%7CAna&f=cidade%7CSTARTS_WITH%7CS%C3%A3o"
        );
    }

    #[test]
    fn clear_resets_to_defaults_and_emits_empty() {
        let mut form = form();
        form.set_value("nome", "Ana");
        form.set_value("cidade", "Rio");
        let change = form.clear();
        assert!(change.is_empty());
        assert!(change.params.is_empty());
        assert_eq!(form.value("nome"), Some(""));
        assert_eq!(form.value("cidade"), Some("São"));
    }

    #[test]
    fn set_filters_replaces_and_resets() {
        let mut form = form();
        form.set_value("nome", "Ana");
        form.set_filters(vec![FilterSpec::new("sku", "SKU", Condition::Equal)]);
        assert_eq!(form.specs().len(), 1);
        assert_eq!(form.value("nome"), None);
        assert_eq!(form.value("sku"), Some(""));
    }

    #[test]
    fn filter_spec_deserializes_with_defaults() {
        let spec: FilterSpec =
            serde_json::from_str(r#"{"name": "nome", "label": "Nome", "condition": "LIKE"}"#)
                .unwrap();
        assert!(spec.trim);
        assert_eq!(spec.condition, Condition::Like);
        assert_eq!(spec.default_value, None);
    }

    #[test]
    fn change_serializes_params_as_pairs() {
        let change = ServerFilterChange::from_items(vec![FilterItem {
            field: "id".into(),
            condition: Condition::GreaterThan,
            value: "10".into(),
        }]);
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["params"][0][0], "f");
        assert_eq!(json["params"][0][1], "id|GREATER_THAN|10");
        assert_eq!(json["filters"][0]["condition"], "GREATER_THAN");
    }
}
