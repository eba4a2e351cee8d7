//! `serde_json` integration: JSON objects as rows, JSON values as operands.

use serde_json::{Map, Value as Json};

use crate::error::{Result, SeekerError};
use crate::operand::Operand;
use crate::traits::Seekable;
use crate::value::{Number, Value};

/// Reads a JSON scalar as a row value. Arrays and objects are `None`.
fn json_scalar(value: Option<&Json>) -> Value<'_> {
    match value {
        Some(Json::String(s)) => Value::String(s),
        Some(Json::Bool(b)) => Value::Bool(*b),
        Some(Json::Number(n)) => Value::Number(json_number(n)),
        _ => Value::None,
    }
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Seekable for Map<String, Json> {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        json_scalar(self.get(field))
    }
}

impl Seekable for Json {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match self {
            Json::Object(map) => map.seeker_field_value(field),
            _ => Value::None,
        }
    }
}

impl TryFrom<&Json> for Operand {
    type Error = SeekerError;

    fn try_from(value: &Json) -> Result<Self> {
        Ok(match value {
            Json::Null => Operand::Null,
            Json::Bool(b) => Operand::Bool(*b),
            Json::Number(n) => Operand::Number(json_number(n)),
            Json::String(s) => Operand::String(s.clone()),
            Json::Array(items) => Operand::List(
                items
                    .iter()
                    .map(Operand::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Json::Object(_) => {
                return Err(SeekerError::UnsupportedOperand(
                    "objects cannot be compared against row fields".to_string(),
                ))
            }
        })
    }
}

impl TryFrom<Json> for Operand {
    type Error = SeekerError;

    fn try_from(value: Json) -> Result<Self> {
        Operand::try_from(&value)
    }
}
