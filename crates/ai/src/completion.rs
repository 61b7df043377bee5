use async_trait::async_trait;

use crate::error::AiError;

#[derive(Clone, Debug, Default)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Generates a short piece of text for a single-turn request. Callers must
/// treat empty content as a failure.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AiError>;
}
