//! Plugin error types.

use thiserror::Error;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin initialization failed.
    #[error("plugin initialization failed: {0}")]
    InitFailed(String),

    /// A request or response payload could not be (de)serialized.
    #[error("invalid plugin payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
