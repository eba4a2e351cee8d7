//! Runtime value types read from rows.
//!
//! The [`Value`] enum is what an accessor returns for a named field. It borrows
//! from the row, so reading a field never clones string data.

use std::cmp::Ordering;
use std::fmt;

/// Runtime value of a row field, borrowed from the row.
///
/// # Example
///
/// ```
/// use tabledata_seeker::{Value, Number};
///
/// struct Produto {
///     nome: String,
///     estoque: u32,
/// }
///
/// fn accessor<'a>(p: &'a Produto, field: &str) -> Value<'a> {
///     match field {
///         "nome" => Value::String(&p.nome),
///         "estoque" => Value::Number(Number::U64(p.estoque as u64)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Enum variant: stable discriminant plus its display label.
    Enum(u32, &'a str),
    /// Boolean value.
    Bool(bool),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Coerces the value to `f64` for ordering comparisons.
    ///
    /// Strings are trimmed and parsed; an empty string is `0`. Anything that
    /// cannot be read as a number (including `None`) becomes `NaN`, which
    /// compares false against everything.
    pub fn coerce_f64(&self) -> f64 {
        match self {
            Value::String(s) => parse_numeric(s),
            Value::Number(n) => n.to_f64(),
            Value::Timestamp(t) => t.as_millis() as f64,
            Value::Enum(d, _) => *d as f64,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::None => f64::NAN,
        }
    }

    /// Returns the string form used for display and text matching.
    ///
    /// `None` is the empty string and enums use their label.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Timestamp(t) => write!(f, "{}", t.as_millis()),
            Value::Enum(_, label) => f.write_str(label),
            Value::Bool(b) => write!(f, "{}", b),
            Value::None => Ok(()),
        }
    }
}

/// Parses a trimmed string as `f64`; empty is `0`, garbage is `NaN`.
pub(crate) fn parse_numeric(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Comparisons between different numeric types are handled by converting
/// to the appropriate common type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            (Number::I64(a), Number::U64(b)) => Some(compare_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(compare_signed_unsigned(b, a).reverse()),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Numeric equality across variants (`I64(5) == F64(5.0)`).
    pub fn numeric_eq(self, other: Number) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

fn compare_signed_unsigned(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty; $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64, i64; i8, i16, i32, i64, isize);
number_from!(U64, u64; u8, u16, u32, u64, usize);
number_from!(F64, f64; f32, f64);

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// ```
/// use tabledata_seeker::Timestamp;
///
/// assert!(Timestamp(1000) < Timestamp(2000));
/// assert_eq!(Timestamp::from_secs(2).as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
