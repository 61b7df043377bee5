use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Provider is not configured: {0}")]
    Configuration(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Provider returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response payload: {0}")]
    InvalidResponse(String),
}
