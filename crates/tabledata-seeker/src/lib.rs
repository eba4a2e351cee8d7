//! Seeker - row conditions for declarative data tables.
//!
//! Seeker evaluates the predicates behind table tabs and server filters
//! against in-memory rows. It supports:
//!
//! - Field types: strings, numbers, timestamps, enums, booleans
//! - Conditions: identity, strict equality, numeric ordering, case-insensitive
//!   text matching and list membership
//! - Fail-open evaluation: a row that cannot be read never hides data
//! - Multi-field ordering with ascending/descending
//!
//! # Quick Start
//!
//! ```rust
//! use tabledata_seeker::{Clause, Condition, Number, Value};
//!
//! struct Conta {
//!     fornecedor: String,
//!     valor: f64,
//!     pago: bool,
//! }
//!
//! fn accessor<'a>(c: &'a Conta, field: &str) -> Value<'a> {
//!     match field {
//!         "fornecedor" => Value::String(&c.fornecedor),
//!         "valor" => Value::Number(Number::F64(c.valor)),
//!         "pago" => Value::Bool(c.pago),
//!         _ => Value::None,
//!     }
//! }
//!
//! let contas = vec![
//!     Conta { fornecedor: "Acme".into(), valor: 250.0, pago: true },
//!     Conta { fornecedor: "Beta".into(), valor: 90.0, pago: false },
//!     Conta { fornecedor: "Acme Sul".into(), valor: 400.0, pago: false },
//! ];
//!
//! let abertas = Clause::new("pago", Condition::Equal, false);
//! assert_eq!(abertas.count(&contas, accessor), 2);
//!
//! let grandes = Clause::new("valor", Condition::GreaterOrEqual, "250");
//! let kept = grandes.filter(&contas, accessor);
//! assert_eq!(kept.len(), 2);
//! assert_eq!(kept[0].fornecedor, "Acme");
//! ```
//!
//! # Condition Semantics
//!
//! | Condition | Rule |
//! |-----------|------|
//! | `All` | every row |
//! | `Equal`, `NotEqual` | strict: kinds must agree, numbers compare numerically |
//! | `GreaterThan` .. `LessOrEqual` | both sides coerced to `f64`; `NaN` never matches |
//! | `Like`, `StartsWith`, `EndsWith` | lower-cased display strings; missing is `""` |
//! | `In` | membership in a list operand; a non-list operand keeps every row |

mod clause;
mod condition;
mod error;
#[cfg(feature = "json")]
mod json;
mod operand;
mod ordering;
mod traits;
mod value;

// Re-export public API
pub use clause::{Clause, Predicate};
pub use condition::Condition;
pub use error::{Result, SeekerError};
pub use operand::Operand;
pub use ordering::{compare_by_orderings, compare_values, sort_rows, Dir, OrderBy};
pub use traits::{Seekable, SeekerEnum, SeekerTimestamp};
pub use value::{Number, Timestamp, Value};
