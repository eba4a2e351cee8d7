//! Ordering types for sorting visible rows.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for field-based ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value::{Number, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering clause specifying a field and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    #[serde(default)]
    pub dir: Dir,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Compares two values according to this ordering.
    ///
    /// Missing values sort last regardless of direction.
    pub fn compare<'a>(&self, a: &Value<'a>, b: &Value<'a>) -> Ordering {
        match (a, b) {
            (Value::None, _) | (_, Value::None) => compare_values(a, b),
            _ => self.dir.apply(compare_values(a, b)),
        }
    }
}

/// Sort rank of a value's kind. Values of different kinds order by rank.
fn kind_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::Timestamp(_) => 2,
        Value::Enum(..) => 3,
        Value::String(_) => 4,
        Value::None => 5,
    }
}

/// NaN sorts after every other number.
fn compare_numbers(a: Number, b: Number) -> Ordering {
    let is_nan = |n: Number| matches!(n, Number::F64(f) if f.is_nan());
    a.compare(b).unwrap_or_else(|| is_nan(a).cmp(&is_nan(b)))
}

/// Total order over values.
///
/// Values of the same kind compare naturally; strings compare
/// case-insensitively so "ana" and "Bruno" sort naturally. Mixed kinds order
/// Bool, Number, Timestamp, Enum, String, then None.
pub fn compare_values<'a>(a: &Value<'a>, b: &Value<'a>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => {
            a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
        }
        (Value::Number(a), Value::Number(b)) => compare_numbers(*a, *b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Enum(a, _), Value::Enum(b, _)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Compares two items using a list of ordering clauses.
///
/// The first clause is the primary key, later ones break ties.
pub fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    for order_by in orderings {
        let val_a = accessor(a, &order_by.field);
        let val_b = accessor(b, &order_by.field);

        let ordering = order_by.compare(&val_a, &val_b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Stable-sorts row references in place by the given orderings.
pub fn sort_rows<T, F>(rows: &mut [&T], orderings: &[OrderBy], accessor: F)
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    if orderings.is_empty() {
        return;
    }
    rows.sort_by(|a, b| compare_by_orderings(*a, *b, orderings, &accessor));
}
