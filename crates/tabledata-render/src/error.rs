//! Error types for table layout.

use thiserror::Error;

/// Errors raised while parsing layout settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A width string that is neither `fill` nor `<n>fr`.
    #[error("invalid width '{0}': expected a number, 'fill' or '<n>fr'")]
    InvalidWidth(String),

    /// An unknown border style name.
    #[error("invalid border style '{0}': expected none, ascii, light, heavy, double or rounded")]
    InvalidBorder(String),
}
