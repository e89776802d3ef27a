use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = AiError> = std::result::Result<T, E>;

/// Error body marker Gemini sends alongside quota exhaustion, also on
/// statuses other than 429.
pub const RATE_LIMIT_MARKER: &str = "RESOURCE_EXHAUSTED";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("No Gemini API key was provided")]
    MissingApiKey,
    #[error("Request to the Gemini API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Rate limit exceeded with the Gemini API: {message}")]
    RateLimited { message: String },
    #[error("The Gemini API replied with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("The model reply contained no usable candidate")]
    EmptyResponse,
    #[error("The model reply did not match the expected output: {0}")]
    ResponseFormat(#[from] serde_json::Error),
}

impl AiError {
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AiError::RateLimited { .. })
    }

    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS || message.contains(RATE_LIMIT_MARKER) {
            AiError::RateLimited { message }
        } else {
            AiError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
