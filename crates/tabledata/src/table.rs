//! The data table: columns, tabs, server filters and ordering over a row
//! type `R`.
//!
//! ```
//! use tabledata::{ColumnSpec, Condition, DataTable, Number, TabSpec, Value};
//!
//! struct Cliente { id: i64, nome: &'static str, ativo: bool }
//!
//! fn cliente<'a>(c: &'a Cliente, field: &str) -> Value<'a> {
//!     match field {
//!         "id" => Value::Number(Number::I64(c.id)),
//!         "nome" => Value::String(c.nome),
//!         "ativo" => Value::Bool(c.ativo),
//!         _ => Value::None,
//!     }
//! }
//!
//! let rows = vec![
//!     Cliente { id: 1, nome: "Ana", ativo: true },
//!     Cliente { id: 2, nome: "Bruno", ativo: false },
//! ];
//!
//! let mut table = DataTable::builder_with_accessor(cliente)
//!     .column(ColumnSpec::new("nome", "Nome"))
//!     .tab(TabSpec::new("Ativos").field("ativo").condition(Condition::Equal).value(true))
//!     .tab(TabSpec::new("Inativos").field("ativo").condition(Condition::Equal).value(false))
//!     .build();
//!
//! assert_eq!(table.visible_rows(&rows)[0].nome, "Ana");
//! table.select_tab("1:ativo:Inativos");
//! assert_eq!(table.visible_rows(&rows)[0].id, 2);
//! ```

use std::fmt;
use std::sync::Arc;

use tabledata_render::{Align, BorderStyle, Width};
use tabledata_seeker::{sort_rows, OrderBy, Seekable, Value};

use crate::column::ColumnSpec;
use crate::filter::{FilterForm, FilterSpec, ServerFilterChange, ServerFilterHandler};
use crate::tab::{TabControl, TabCount, TabSet, TabSpec, TabState};
use crate::view::{
    render_text, Body, HeaderCell, TabBadge, TableView, DEFAULT_EMPTY_TEXT, NO_COLUMNS_TEXT,
};

/// Reads a named field from a row.
pub type Accessor<R> = for<'a> fn(&'a R, &str) -> Value<'a>;

/// Column name that marks the actions column unless configured otherwise.
pub const DEFAULT_ACTIONS_KEY: &str = "acoes";

/// Fixed width of the actions column unless configured otherwise.
pub const DEFAULT_ACTIONS_WIDTH: usize = 14;

/// A configured table over rows of type `R`.
///
/// Rows are not stored; every query takes the current dataset. The table only
/// owns the active tab key (when [`TabControl::Owned`]) and the filter form.
pub struct DataTable<R> {
    columns: Vec<ColumnSpec<R>>,
    tabs: TabSet,
    tab_state: TabState,
    filters: Option<FilterForm>,
    on_server_filter_change: Option<ServerFilterHandler>,
    order_by: Vec<OrderBy>,
    actions_key: String,
    actions_width: usize,
    empty_text: String,
    accessor: Accessor<R>,
}

impl<R: Seekable> DataTable<R> {
    /// Starts a builder reading fields through [`Seekable`].
    pub fn builder() -> DataTableBuilder<R> {
        DataTableBuilder::new(R::accessor)
    }
}

impl<R> DataTable<R> {
    /// Starts a builder reading fields through `accessor`.
    pub fn builder_with_accessor(accessor: Accessor<R>) -> DataTableBuilder<R> {
        DataTableBuilder::new(accessor)
    }

    pub fn columns(&self) -> &[ColumnSpec<R>] {
        &self.columns
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn tab_control(&self) -> &TabControl {
        self.tab_state.control()
    }

    pub fn order_by(&self) -> &[OrderBy] {
        &self.order_by
    }

    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    pub fn actions_key(&self) -> &str {
        &self.actions_key
    }

    pub fn is_actions_column(&self, column: &ColumnSpec<R>) -> bool {
        column.name == self.actions_key
    }

    /// Key of the active tab. `None` only for an owned table without tabs.
    pub fn active_tab_key(&self) -> Option<&str> {
        self.tab_state.active()
    }

    /// The tab the active key points at, if any.
    pub fn active_tab(&self) -> Option<&TabSpec> {
        self.active_tab_key().and_then(|k| self.tabs.get(k))
    }

    /// Selects a tab. Owned tables switch immediately; controlled tables
    /// report the key to their change handler and keep the current key until
    /// [`set_active_key`](Self::set_active_key) is called.
    pub fn select_tab(&mut self, key: &str) {
        self.tab_state.select(key);
    }

    /// Pushes the active key from outside, as a controlling caller does after
    /// handling a selection.
    pub fn set_active_key(&mut self, key: &str) {
        self.tab_state.set_active_key(key);
    }

    /// Rows visible under the active tab, ordered by `order_by`.
    pub fn visible_rows<'r>(&self, rows: &'r [R]) -> Vec<&'r R> {
        let mut visible = self.tabs.filter(rows, self.active_tab_key(), self.accessor);
        sort_rows(&mut visible, &self.order_by, self.accessor);
        visible
    }

    /// Badge counts for every tab over the full dataset.
    pub fn tab_counts(&self, rows: &[R]) -> Vec<TabCount> {
        self.tabs.counts(rows, self.accessor)
    }

    pub fn filter_form(&self) -> Option<&FilterForm> {
        self.filters.as_ref()
    }

    /// Replaces the server filters. An empty list removes the form.
    pub fn set_filters(&mut self, specs: Vec<FilterSpec>) {
        if specs.is_empty() {
            self.filters = None;
            return;
        }
        match &mut self.filters {
            Some(form) => form.set_filters(specs),
            None => self.filters = Some(FilterForm::new(specs)),
        }
    }

    /// Edits one filter value. Returns `false` without a form or for an
    /// unknown filter.
    pub fn set_filter_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match &mut self.filters {
            Some(form) => form.set_value(name, value),
            None => false,
        }
    }

    /// Packages the current filter values and hands them to the change
    /// handler. `None` when the table has no filters.
    pub fn submit_filters(&self) -> Option<ServerFilterChange> {
        let change = self.filters.as_ref()?.submit();
        self.notify(&change);
        Some(change)
    }

    /// Resets the filter values and hands an empty change to the handler.
    pub fn clear_filters(&mut self) -> Option<ServerFilterChange> {
        let change = self.filters.as_mut()?.clear();
        self.notify(&change);
        Some(change)
    }

    fn notify(&self, change: &ServerFilterChange) {
        if let Some(handler) = &self.on_server_filter_change {
            handler(change);
        }
    }

    fn header_cell(&self, column: &ColumnSpec<R>) -> HeaderCell {
        let is_actions = self.is_actions_column(column);
        let (width, align) = if is_actions {
            (Width::Fixed(self.actions_width), Align::Right)
        } else {
            (
                column.width.clone().unwrap_or_else(|| column.default_width()),
                column.align.unwrap_or_default(),
            )
        };
        HeaderCell {
            name: column.name.clone(),
            label: column.label.clone(),
            is_actions,
            width,
            align,
        }
    }

    /// Assembles the table for `rows`: tab badges, headers and body.
    pub fn view(&self, rows: &[R]) -> TableView {
        let active = self.active_tab_key();
        let tabs = self
            .tab_counts(rows)
            .into_iter()
            .map(|c| TabBadge {
                active: active == Some(c.key.as_str()),
                key: c.key,
                label: c.label,
                count: c.count,
            })
            .collect();

        let headers: Vec<HeaderCell> = self.columns.iter().map(|c| self.header_cell(c)).collect();

        let body = if self.columns.is_empty() {
            Body::NoColumns(NO_COLUMNS_TEXT.to_string())
        } else {
            let visible = self.visible_rows(rows);
            if visible.is_empty() {
                Body::Empty(self.empty_text.clone())
            } else {
                Body::Rows(
                    visible
                        .into_iter()
                        .map(|row| {
                            self.columns
                                .iter()
                                .map(|c| c.cell(row, self.accessor))
                                .collect()
                        })
                        .collect(),
                )
            }
        };

        tracing::trace!(rows = rows.len(), body_rows = body.row_count(), "table view assembled");

        TableView {
            tabs,
            has_filters: self.filters.is_some(),
            filters_title: self.filters.as_ref().map(|f| f.title().to_string()),
            active_filters: self.filters.as_ref().map_or(0, FilterForm::active_count),
            headers,
            body,
        }
    }

    /// Shorthand for [`view`](Self::view) followed by [`render_text`].
    pub fn render_text(&self, rows: &[R], width: usize, border: BorderStyle) -> String {
        render_text(&self.view(rows), width, border)
    }
}

impl<R> fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("tabs", &self.tabs)
            .field("tab_state", &self.tab_state)
            .field("filters", &self.filters)
            .field("order_by", &self.order_by)
            .field("actions_key", &self.actions_key)
            .field("actions_width", &self.actions_width)
            .field("empty_text", &self.empty_text)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DataTable`].
pub struct DataTableBuilder<R> {
    columns: Vec<ColumnSpec<R>>,
    tabs: Vec<TabSpec>,
    tab_control: TabControl,
    default_tab: Option<String>,
    filters: Vec<FilterSpec>,
    filters_title: Option<String>,
    on_server_filter_change: Option<ServerFilterHandler>,
    order_by: Vec<OrderBy>,
    actions_key: String,
    actions_width: usize,
    empty_text: String,
    accessor: Accessor<R>,
}

impl<R> DataTableBuilder<R> {
    fn new(accessor: Accessor<R>) -> Self {
        DataTableBuilder {
            columns: Vec::new(),
            tabs: Vec::new(),
            tab_control: TabControl::Owned,
            default_tab: None,
            filters: Vec::new(),
            filters_title: None,
            on_server_filter_change: None,
            order_by: Vec::new(),
            actions_key: DEFAULT_ACTIONS_KEY.to_string(),
            actions_width: DEFAULT_ACTIONS_WIDTH,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            accessor,
        }
    }

    pub fn column(mut self, column: ColumnSpec<R>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec<R>>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn tab(mut self, tab: TabSpec) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn tabs(mut self, tabs: impl IntoIterator<Item = TabSpec>) -> Self {
        self.tabs.extend(tabs);
        self
    }

    pub fn tab_control(mut self, control: TabControl) -> Self {
        self.tab_control = control;
        self
    }

    /// Initial tab key for an owned table. Defaults to the first tab.
    pub fn default_tab(mut self, key: impl Into<String>) -> Self {
        self.default_tab = Some(key.into());
        self
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(mut self, filters: impl IntoIterator<Item = FilterSpec>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn filters_title(mut self, title: impl Into<String>) -> Self {
        self.filters_title = Some(title.into());
        self
    }

    pub fn on_server_filter_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ServerFilterChange) + Send + Sync + 'static,
    {
        self.on_server_filter_change = Some(Arc::new(handler));
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by.push(order_by);
        self
    }

    pub fn actions_key(mut self, key: impl Into<String>) -> Self {
        self.actions_key = key.into();
        self
    }

    pub fn actions_width(mut self, width: usize) -> Self {
        self.actions_width = width;
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn build(self) -> DataTable<R> {
        let tabs = TabSet::new(self.tabs);
        let tab_state = TabState::new(self.tab_control, &tabs, self.default_tab);
        let filters = if self.filters.is_empty() {
            None
        } else {
            let form = FilterForm::new(self.filters);
            Some(match self.filters_title {
                Some(title) => form.with_title(title),
                None => form,
            })
        };

        tracing::debug!(
            columns = self.columns.len(),
            tabs = tabs.len(),
            filters = filters.as_ref().map_or(0, |f| f.specs().len()),
            "data table built"
        );

        DataTable {
            columns: self.columns,
            tabs,
            tab_state,
            filters,
            on_server_filter_change: self.on_server_filter_change,
            order_by: self.order_by,
            actions_key: self.actions_key,
            actions_width: self.actions_width,
            empty_text: self.empty_text,
            accessor: self.accessor,
        }
    }
}
