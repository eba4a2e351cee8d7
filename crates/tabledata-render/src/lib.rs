//! Plain-text table layout for tabledata.
//!
//! This crate knows nothing about rows, tabs or filters: it receives already
//! stringified cells and lays them out.
//!
//! - [`Width`] and [`Align`] describe columns; widths deserialize from `8`,
//!   `{min, max}`, `"fill"` and `"2fr"`
//! - [`TableSpec::resolve_widths_from_data`] turns specs into concrete widths
//! - [`Table`] renders header, separator, rows and spanning empty-state rows
//!   with an optional [`BorderStyle`]
//! - [`display_width`], [`truncate_end`] and the `pad_*` helpers are
//!   ANSI-aware

mod decorator;
mod error;
mod resolve;
mod types;
mod util;

pub use decorator::{block_width, BorderStyle, Table};
pub use error::RenderError;
pub use resolve::ResolvedWidths;
pub use types::{Align, Column, Decorations, TableSpec, TableSpecBuilder, Width};
pub use util::{display_width, fit_cell, pad_center, pad_left, pad_right, truncate_end};
