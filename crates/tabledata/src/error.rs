//! Error types for table configuration and assembly.

use std::path::PathBuf;

use tabledata_seeker::SeekerError;
use thiserror::Error;

/// Errors raised while loading a [`TableConfig`](crate::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML table config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON table config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not `.yaml`, `.yml` or `.json`.
    #[error("unsupported config format '{0}': expected .yaml, .yml or .json")]
    UnsupportedFormat(String),

    /// A tab's `value` cannot be used as an operand.
    #[error("tab '{tab}' has an invalid value")]
    InvalidTabValue {
        tab: String,
        #[source]
        source: SeekerError,
    },
}

/// Errors from the table engine.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Condition(#[from] SeekerError),

    /// A `field=value` assignment without the `=`.
    #[error("invalid filter assignment '{0}': expected field=value")]
    InvalidAssignment(String),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
