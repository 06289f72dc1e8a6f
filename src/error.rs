//! Error types for textkit
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in textkit
#[derive(Debug, Error)]
pub enum TextkitError {
    /// No descriptor registered under the page id
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Catalog file could not be read or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Registry consistency check failed
    #[error("Check failed: {0}")]
    Check(String),

    /// Output rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for textkit operations
pub type Result<T> = std::result::Result<T, TextkitError>;
