//! Process-level errors and the JSON error body shared by every endpoint

use serde::Serialize;

/// Failures while starting or running the server process
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Error response structure for API responses
///
/// Serializes as `{ "error": <message>, "code": <code>, ...context }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub context: serde_json::Map<String, serde_json::Value>,
}

impl ErrorResponse {
    /// Create a response with no extra context
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            context: serde_json::Map::new(),
        }
    }

    /// Attach a context field to the body
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
