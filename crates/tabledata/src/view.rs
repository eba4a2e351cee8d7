//! Assembled table views and their plain-text layout.
//!
//! A [`TableView`] is everything needed to draw a table once tabs, filtering
//! and cell rendering have run: badges, headers and either body rows or an
//! empty-state notice. [`render_text`] lays it out with `tabledata-render`.

use serde::Serialize;
use tabledata_render::{Align, BorderStyle, Column, Table, TableSpec, Width};

/// Default text of the empty-state row.
pub const DEFAULT_EMPTY_TEXT: &str = "Nenhum registro encontrado.";

/// Notice shown instead of a table when no columns are configured.
pub const NO_COLUMNS_TEXT: &str = "Nenhuma coluna configurada.";

/// One tab in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBadge {
    pub key: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

impl TabBadge {
    /// `Label (n)`, bracketed when active.
    pub fn caption(&self) -> String {
        if self.active {
            format!("[{} ({})]", self.label, self.count)
        } else {
            format!("{} ({})", self.label, self.count)
        }
    }
}

/// One column header with its resolved layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub name: String,
    pub label: String,
    pub is_actions: bool,
    pub width: Width,
    pub align: Align,
}

/// Table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Body {
    /// Rendered cells, one inner vector per visible row.
    Rows(Vec<Vec<String>>),
    /// No visible rows; a single row spanning every column with this text.
    Empty(String),
    /// No columns configured; only this notice is shown.
    NoColumns(String),
}

impl Body {
    /// Number of body rows as drawn, counting the empty-state row.
    pub fn row_count(&self) -> usize {
        match self {
            Body::Rows(rows) => rows.len(),
            Body::Empty(_) => 1,
            Body::NoColumns(_) => 0,
        }
    }
}

/// A fully assembled table, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Empty when the table has no tabs.
    pub tabs: Vec<TabBadge>,
    pub has_filters: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_title: Option<String>,
    /// Filters currently holding a non-blank value.
    pub active_filters: usize,
    pub headers: Vec<HeaderCell>,
    pub body: Body,
}

impl TableView {
    pub fn active_tab(&self) -> Option<&TabBadge> {
        self.tabs.iter().find(|t| t.active)
    }

    pub fn is_empty(&self) -> bool {
        !matches!(self.body, Body::Rows(_))
    }

    /// The tab bar line, or `None` without tabs.
    pub fn tab_bar(&self) -> Option<String> {
        if self.tabs.is_empty() {
            return None;
        }
        let captions: Vec<String> = self.tabs.iter().map(TabBadge::caption).collect();
        Some(captions.join("  "))
    }

    fn table_spec(&self) -> TableSpec {
        TableSpec::builder()
            .columns(
                self.headers
                    .iter()
                    .map(|h| Column::new(h.width.clone()).align(h.align).header(&h.label)),
            )
            .build()
    }
}

/// Lays `view` out as plain text no wider than `width` where columns allow.
///
/// Output lines, in order: the tab bar (if any), the filter summary (if the
/// table has filters), then the table with its header, separator and body.
pub fn render_text(view: &TableView, width: usize, border: BorderStyle) -> String {
    let mut lines = Vec::new();
    if let Some(bar) = view.tab_bar() {
        lines.push(bar);
    }
    if view.has_filters {
        let title = view
            .filters_title
            .as_deref()
            .unwrap_or(crate::filter::DEFAULT_FILTERS_TITLE);
        lines.push(format!("{}: {} active", title, view.active_filters));
    }

    match &view.body {
        Body::NoColumns(notice) => lines.push(notice.clone()),
        Body::Rows(rows) => {
            let table = Table::from_data(view.table_spec(), width, border, rows.as_slice());
            lines.push(table.render(rows.as_slice()));
        }
        Body::Empty(text) => {
            let table = Table::from_data::<String>(view.table_spec(), width, border, &[]);
            lines.push(table.render_empty(text));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<HeaderCell> {
        vec![
            HeaderCell {
                name: "nome".into(),
                label: "Nome".into(),
                is_actions: false,
                width: Width::bounded(4, 40),
                align: Align::Left,
            },
            HeaderCell {
                name: "acoes".into(),
                label: "Ações".into(),
                is_actions: true,
                width: Width::Fixed(8),
                align: Align::Right,
            },
        ]
    }

    fn view(body: Body) -> TableView {
        TableView {
            tabs: vec![
                TabBadge {
                    key: "a".into(),
                    label: "Ativos".into(),
                    count: 2,
                    active: true,
                },
                TabBadge {
                    key: "i".into(),
                    label: "Inativos".into(),
                    count: 1,
                    active: false,
                },
            ],
            has_filters: false,
            filters_title: None,
            active_filters: 0,
            headers: headers(),
            body,
        }
    }

    #[test]
    fn tab_bar_marks_active() {
        let v = view(Body::Empty("Vazio".into()));
        assert_eq!(v.tab_bar().as_deref(), Some("[Ativos (2)]  Inativos (1)"));
        assert_eq!(v.active_tab().map(|t| t.key.as_str()), Some("a"));
    }

    #[test]
    fn rows_render_under_header() {
        let v = view(Body::Rows(vec![vec!["Ana".into(), "editar".into()]]));
        let out = render_text(&v, 80, BorderStyle::None);
        assert_eq!(
            out,
            "[Ativos (2)]  Inativos (1)\nNome     Ações\n--------------\nAna     editar"
        );
    }

    #[test]
    fn empty_body_is_one_spanning_row() {
        let v = view(Body::Empty("Vazio".into()));
        let out = render_text(&v, 80, BorderStyle::None);
        assert_eq!(out.lines().last(), Some("Vazio"));
        assert_eq!(v.body.row_count(), 1);
        assert!(v.is_empty());
    }

    #[test]
    fn no_columns_is_only_the_notice() {
        let mut v = view(Body::NoColumns(NO_COLUMNS_TEXT.into()));
        v.tabs.clear();
        v.headers.clear();
        assert_eq!(render_text(&v, 80, BorderStyle::Ascii), NO_COLUMNS_TEXT);
    }

    #[test]
    fn filter_summary_line() {
        let mut v = view(Body::Empty("Vazio".into()));
        v.has_filters = true;
        v.active_filters = 1;
        let out = render_text(&v, 80, BorderStyle::None);
        assert_eq!(out.lines().nth(1), Some("Filtros: 1 active"));
        v.filters_title = Some("Busca".into());
        let out = render_text(&v, 80, BorderStyle::None);
        assert_eq!(out.lines().nth(1), Some("Busca: 1 active"));
    }

    #[test]
    fn body_serializes_with_kind() {
        let json = serde_json::to_value(Body::Empty("Vazio".into())).unwrap();
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["content"], "Vazio");
    }
}
