use async_trait::async_trait;
use prompta_domain::embedding::Embedding;

use crate::error::AiError;

/// Converts text into dense vectors capturing semantic meaning. One output
/// per input, index-aligned.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Embedding>, AiError>;
}
