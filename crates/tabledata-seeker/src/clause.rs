//! Predicates and field clauses.
//!
//! A [`Predicate`] is a condition plus an operand, evaluated against one
//! [`Value`]. A [`Clause`] binds a predicate to a field name and runs it over
//! a slice of rows.

use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};

use crate::condition::Condition;
use crate::operand::Operand;
use crate::value::Value;

/// A condition and the operand it compares against.
///
/// # Example
///
/// ```
/// use tabledata_seeker::{Condition, Predicate, Value, Number};
///
/// let p = Predicate::new(Condition::GreaterOrEqual, 250);
/// assert!(p.matches(&Value::Number(Number::I64(250))));
/// assert!(!p.matches(&Value::Number(Number::I64(200))));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    pub condition: Condition,
    pub operand: Operand,
}

impl Predicate {
    pub fn new(condition: Condition, operand: impl Into<Operand>) -> Self {
        Predicate {
            condition,
            operand: operand.into(),
        }
    }

    /// Evaluates this predicate against a field value.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match self.condition {
            Condition::All => true,
            Condition::Equal => self.operand.strict_eq(value),
            Condition::NotEqual => !self.operand.strict_eq(value),
            Condition::GreaterThan
            | Condition::GreaterOrEqual
            | Condition::LessThan
            | Condition::LessOrEqual => match self.compare(value) {
                Some(ordering) => self.condition.eval_ordering(ordering),
                None => false,
            },
            Condition::Like => self.match_text(value, |field, target| field.contains(target)),
            Condition::StartsWith => {
                self.match_text(value, |field, target| field.starts_with(target))
            }
            Condition::EndsWith => self.match_text(value, |field, target| field.ends_with(target)),
            Condition::In => match self.operand.as_list() {
                Some(items) => items.iter().any(|item| item.strict_eq(value)),
                None => true,
            },
        }
    }

    /// Orders `value` relative to the operand.
    ///
    /// Timestamps compare as timestamps; everything else is coerced to `f64`,
    /// and a `NaN` on either side makes the pair incomparable.
    fn compare(&self, value: &Value<'_>) -> Option<Ordering> {
        if let (Value::Timestamp(field), Operand::Timestamp(target)) = (value, &self.operand) {
            return Some(field.cmp(target));
        }
        value.coerce_f64().partial_cmp(&self.operand.coerce_f64())
    }

    fn match_text(&self, value: &Value<'_>, test: impl Fn(&str, &str) -> bool) -> bool {
        let field = value.to_display_string().to_lowercase();
        let target = self.operand.to_string().to_lowercase();
        test(&field, &target)
    }
}

/// A predicate bound to a row field.
///
/// A clause without a field, or with [`Condition::All`], is the identity:
/// it keeps every row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Clause {
    pub field: Option<String>,
    pub predicate: Predicate,
}

impl Clause {
    pub fn new(field: impl Into<String>, condition: Condition, operand: impl Into<Operand>) -> Self {
        Clause {
            field: Some(field.into()),
            predicate: Predicate::new(condition, operand),
        }
    }

    /// The clause that keeps every row.
    pub fn all() -> Self {
        Clause::default()
    }

    /// Returns `true` if this clause keeps every row without reading fields.
    pub fn is_identity(&self) -> bool {
        self.predicate.condition == Condition::All || self.field.is_none()
    }

    /// Tests a single row.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        match &self.field {
            Some(field) if !self.is_identity() => self.predicate.matches(&accessor(item, field)),
            _ => true,
        }
    }

    /// Filters a slice, keeping order.
    ///
    /// If the accessor panics while reading a row, the whole evaluation is
    /// abandoned and every row is returned unfiltered.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        if self.is_identity() {
            return items.iter().collect();
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            items
                .iter()
                .filter(|item| self.matches(*item, &accessor))
                .collect::<Vec<&'a T>>()
        }));

        match outcome {
            Ok(rows) => rows,
            Err(_) => {
                tracing::warn!(
                    field = self.field.as_deref().unwrap_or_default(),
                    condition = %self.predicate.condition,
                    "row evaluation panicked, returning rows unfiltered"
                );
                items.iter().collect()
            }
        }
    }

    /// Counts the rows [`Clause::filter`] would keep.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filter(items, accessor).len()
    }
}
