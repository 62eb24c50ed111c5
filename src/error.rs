use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DingError {
    #[error("Invalid server URL: {0} (expected http:// or https://)")]
    InvalidServerUrl(String),

    #[error("Invalid push URL: {0} (expected ws:// or wss://)")]
    InvalidPushUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Malformed payload: {0}")]
    Payload(String),
}
