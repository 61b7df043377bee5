use prompta_ai::AiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("domain must be a non-empty string")]
    EmptyDomain,
    #[error("recommendation provider is not configured: {0}")]
    Configuration(String),
    #[error("embedding generation failed: {0}")]
    Embedding(#[source] AiError),
}

impl From<AiError> for RecommendError {
    fn from(error: AiError) -> Self {
        match error {
            AiError::Configuration(message) => RecommendError::Configuration(message),
            other => RecommendError::Embedding(other),
        }
    }
}
