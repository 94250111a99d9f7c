use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field is missing or empty. The message is shown to the caller as-is.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid JSON body")]
    InvalidJsonBody,

    #[error("AI service not configured")]
    NotConfigured,

    #[error("{0}")]
    NotFound(String),

    #[error("LLM API error: {0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    Unexpected(String),
}
