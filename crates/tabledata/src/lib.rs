//! Declarative data tables.
//!
//! `tabledata` turns a list of column, tab and filter descriptors into a
//! table over any row type:
//!
//! - **Columns** ([`ColumnSpec`]) read one field each and render it as its
//!   string form or through a custom renderer. The column named by
//!   `actions_key` becomes a fixed-width, right-aligned actions column.
//! - **Tabs** ([`TabSpec`]) filter rows client-side with a [`Condition`] on
//!   one field. Every tab shows a badge with the number of rows it matches
//!   over the full dataset. The active tab is owned by the table or by the
//!   caller ([`TabControl`]).
//! - **Server filters** ([`FilterSpec`]) are never applied locally. The
//!   [`FilterForm`] packages non-blank values as `f=field|CONDITION|value`
//!   query parameters ([`ServerFilterChange`]) for the caller to send.
//! - **Views** ([`TableView`]) hold the assembled badges, headers and body,
//!   and [`render_text`] lays them out as a plain-text table.
//!
//! Rows are read through [`Seekable`], usually derived:
//!
//! ```
//! use tabledata::{ColumnSpec, Condition, DataTable, Seekable, TabSpec};
//!
//! #[derive(Seekable)]
//! struct Cliente {
//!     #[seek(Number)]
//!     id: i64,
//!     #[seek(String)]
//!     nome: String,
//!     #[seek(Bool)]
//!     ativo: bool,
//! }
//!
//! let clientes = vec![
//!     Cliente { id: 1, nome: "Ana".into(), ativo: true },
//!     Cliente { id: 2, nome: "Bruno".into(), ativo: false },
//!     Cliente { id: 3, nome: "Carla".into(), ativo: true },
//! ];
//!
//! let table = DataTable::<Cliente>::builder()
//!     .column(ColumnSpec::new(Cliente::NOME, "Nome"))
//!     .tab(TabSpec::new("Ativos").field(Cliente::ATIVO).condition(Condition::Equal).value(true))
//!     .tab(TabSpec::new("Inativos").field(Cliente::ATIVO).condition(Condition::Equal).value(false))
//!     .build();
//!
//! let counts: Vec<usize> = table.tab_counts(&clientes).iter().map(|c| c.count).collect();
//! assert_eq!(counts, vec![2, 1]);
//! ```
//!
//! Tables can also be described in YAML or JSON with [`TableConfig`].

mod column;
mod config;
mod error;
mod filter;
mod tab;
mod table;
mod view;

pub use column::{CellRenderer, ColumnSpec, DEFAULT_MAX_COLUMN_WIDTH};
pub use config::{ColumnConfig, FiltersConfig, TabConfig, TableConfig};
pub use error::{ConfigError, Result, TableError};
pub use filter::{
    FilterForm, FilterItem, FilterSpec, QueryParams, ServerFilterChange, ServerFilterHandler,
    DEFAULT_FILTERS_TITLE, FILTER_PARAM,
};
pub use tab::{apply_tab_filter, TabChangeHandler, TabControl, TabCount, TabSet, TabSpec};
pub use table::{
    Accessor, DataTable, DataTableBuilder, DEFAULT_ACTIONS_KEY, DEFAULT_ACTIONS_WIDTH,
};
pub use view::{
    render_text, Body, HeaderCell, TabBadge, TableView, DEFAULT_EMPTY_TEXT, NO_COLUMNS_TEXT,
};

pub use tabledata_macros::Seekable;
pub use tabledata_render::{Align, BorderStyle, Width};
pub use tabledata_seeker::{
    Clause, Condition, Dir, Number, Operand, OrderBy, Predicate, Seekable, SeekerEnum,
    SeekerError, SeekerTimestamp, Timestamp, Value,
};

/// Parses a `field=value` assignment, as used to set filter values from the
/// command line.
///
/// ```
/// assert_eq!(tabledata::parse_assignment("nome=Ana=Maria").unwrap(), ("nome", "Ana=Maria"));
/// assert!(tabledata::parse_assignment("nome").is_err());
/// ```
pub fn parse_assignment(input: &str) -> Result<(&str, &str)> {
    input
        .split_once('=')
        .filter(|(field, _)| !field.trim().is_empty())
        .map(|(field, value)| (field.trim(), value))
        .ok_or_else(|| TableError::InvalidAssignment(input.to_string()))
}
