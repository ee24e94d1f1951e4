//! Error types

use thiserror::Error;

/// Result type for trigger operations
pub type Result<T> = std::result::Result<T, TriggerError>;

/// Errors raised by the trigger loop and its configuration
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The world connection rejected or could not deliver a request
    #[error("world connection error: {0}")]
    Connection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML layout: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to parse JSON layout: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The layout parsed but describes an impossible trap
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
