//! Error types for code-timeline
//!
//! Classification itself never fails; these cover configuration,
//! palette parsing and terminal output.

use thiserror::Error;

/// Result type alias for code-timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Error types
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("{0}")]
    Message(String),
}
