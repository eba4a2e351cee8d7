//! Owned comparison operands.
//!
//! Unlike [`Value`], which borrows from a row, an [`Operand`] owns its data so
//! it can live inside tab descriptors and configuration.

use std::fmt;

use crate::value::{parse_numeric, Number, Timestamp, Value};

/// Owned operand a row value is compared against.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    /// No operand. Strictly equal only to a missing field.
    #[default]
    Null,
    String(String),
    Number(Number),
    Timestamp(Timestamp),
    /// Enum discriminant.
    Enum(u32),
    Bool(bool),
    /// List operand, used by `In`.
    List(Vec<Operand>),
}

impl Operand {
    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Null)
    }

    /// Returns the list items if this is a `List` operand.
    pub fn as_list(&self) -> Option<&[Operand]> {
        match self {
            Operand::List(items) => Some(items),
            _ => None,
        }
    }

    /// Strict equality against a row value.
    ///
    /// Kinds must agree: `"1"` never equals `1`, and `true` never equals `1`.
    /// Numbers compare numerically across integer and float variants.
    pub fn strict_eq(&self, value: &Value<'_>) -> bool {
        match (self, value) {
            (Operand::String(o), Value::String(v)) => o == v,
            (Operand::Number(o), Value::Number(v)) => v.numeric_eq(*o),
            (Operand::Timestamp(o), Value::Timestamp(v)) => o == v,
            (Operand::Enum(o), Value::Enum(v, _)) => o == v,
            (Operand::Bool(o), Value::Bool(v)) => o == v,
            (Operand::Null, Value::None) => true,
            _ => false,
        }
    }

    /// Coerces the operand to `f64` with the same rules as [`Value::coerce_f64`].
    pub fn coerce_f64(&self) -> f64 {
        match self {
            Operand::String(s) => parse_numeric(s),
            Operand::Number(n) => n.to_f64(),
            Operand::Timestamp(t) => t.as_millis() as f64,
            Operand::Enum(d) => *d as f64,
            Operand::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Operand::Null | Operand::List(_) => f64::NAN,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Null => Ok(()),
            Operand::String(s) => f.write_str(s),
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Timestamp(t) => write!(f, "{}", t.as_millis()),
            Operand::Enum(d) => write!(f, "{}", d),
            Operand::Bool(b) => write!(f, "{}", b),
            Operand::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::String(s)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::String(s.to_string())
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<Timestamp> for Operand {
    fn from(t: Timestamp) -> Self {
        Operand::Timestamp(t)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(items: Vec<T>) -> Self {
        Operand::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Operand::Null)
    }
}

macro_rules! operand_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Operand::Number(Number::from(n))
                }
            }
        )*
    };
}

operand_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
