//! Comparison conditions shared by tabs and server filters.
//!
//! A [`Condition`] names how a row's field value is compared with an operand.
//! Its wire code (`EQUAL`, `LIKE`, ...) is what server filters carry in the
//! `f=field|CODE|value` query parameter.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeekerError;

/// Comparison condition for a tab or filter.
///
/// Grouped by semantics:
/// - **Identity**: `All` matches every row
/// - **Strict**: `Equal`, `NotEqual`
/// - **Ordering** (numeric coercion): `GreaterThan`, `GreaterOrEqual`, `LessThan`, `LessOrEqual`
/// - **Text** (case-insensitive): `Like`, `StartsWith`, `EndsWith`
/// - **Membership**: `In`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// No filtering; always matches.
    #[default]
    All,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    /// Case-insensitive substring containment.
    Like,
    StartsWith,
    EndsWith,
    /// Membership in a list operand.
    In,
}

impl Condition {
    /// Every condition, in declaration order.
    pub const ALL: [Condition; 11] = [
        Condition::All,
        Condition::Equal,
        Condition::NotEqual,
        Condition::GreaterThan,
        Condition::GreaterOrEqual,
        Condition::LessThan,
        Condition::LessOrEqual,
        Condition::Like,
        Condition::StartsWith,
        Condition::EndsWith,
        Condition::In,
    ];

    /// Returns `true` for the numeric ordering conditions.
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Condition::GreaterThan
                | Condition::GreaterOrEqual
                | Condition::LessThan
                | Condition::LessOrEqual
        )
    }

    /// Returns `true` for the case-insensitive text conditions.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Condition::Like | Condition::StartsWith | Condition::EndsWith
        )
    }

    /// Evaluates an ordering condition given a comparison result.
    ///
    /// Non-ordering conditions return `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Condition::GreaterThan => ordering == Ordering::Greater,
            Condition::GreaterOrEqual => ordering != Ordering::Less,
            Condition::LessThan => ordering == Ordering::Less,
            Condition::LessOrEqual => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Returns the wire code of this condition.
    pub fn code(self) -> &'static str {
        match self {
            Condition::All => "ALL",
            Condition::Equal => "EQUAL",
            Condition::NotEqual => "NOT_EQUAL",
            Condition::GreaterThan => "GREATER_THAN",
            Condition::GreaterOrEqual => "GREATER_OR_EQUAL",
            Condition::LessThan => "LESS_THAN",
            Condition::LessOrEqual => "LESS_OR_EQUAL",
            Condition::Like => "LIKE",
            Condition::StartsWith => "STARTS_WITH",
            Condition::EndsWith => "ENDS_WITH",
            Condition::In => "IN",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Condition {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Condition::ALL
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| SeekerError::UnknownCondition(s.to_string()))
    }
}
