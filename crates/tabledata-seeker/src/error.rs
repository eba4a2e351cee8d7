//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when building conditions or operands.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// A condition code that is not one of the known wire codes.
    #[error("unknown condition code: '{0}'")]
    UnknownCondition(String),

    /// An operand that cannot be compared against row values.
    #[error("unsupported operand: {0}")]
    UnsupportedOperand(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
