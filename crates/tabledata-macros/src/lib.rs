//! Proc macros for tabledata.
//!
//! # Derive Macros
//!
//! - [`Seekable`] - Generate field accessors for tab conditions, column
//!   rendering and ordering

mod seeker;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Seekable` trait for row types.
///
/// This macro generates an implementation of the `Seekable` trait from
/// `tabledata-seeker`, so rows can be read by field name without an
/// intermediate JSON representation.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Any `AsRef<str>` field |
/// | `Number` | Any `Copy` numeric field convertible into `Number` |
/// | `Timestamp` | Requires a `SeekerTimestamp` impl |
/// | `Enum` | Requires a `SeekerEnum` impl (discriminant plus label) |
/// | `Bool` | Boolean field |
/// | `optional` | The field is an `Option<T>`; `None` reads as a missing value |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom field name |
///
/// Fields without a `#[seek(...)]` type are not exposed.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Produto::NOME`, `Produto::VALOR_VENDA`)
/// 2. Implementation of `Seekable::seeker_field_value()`
///
/// # Example
///
/// ```ignore
/// use tabledata_macros::Seekable;
/// use tabledata_seeker::{Clause, Condition, Seekable};
///
/// #[derive(Seekable)]
/// struct Produto {
///     #[seek(String)]
///     nome: String,
///
///     #[seek(Number, rename = "valorVenda")]
///     valor_venda: f64,
///
///     #[seek(Bool)]
///     ativo: bool,
///
///     #[seek(String, optional)]
///     categoria: Option<String>,
/// }
///
/// let clause = Clause::new(Produto::VALOR_VENDA, Condition::GreaterOrEqual, 250);
/// let caros = clause.filter(&produtos, Produto::accessor);
/// ```
#[proc_macro_derive(Seekable, attributes(seek))]
pub fn seekable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    seeker::seekable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
