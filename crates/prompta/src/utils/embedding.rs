use std::sync::Arc;

use prompta_ai::{AiError, Embedder};
use prompta_domain::embedding::Embedding;

pub async fn generate_embedding(
    embedder: &Arc<dyn Embedder>,
    content: &str,
) -> Result<Embedding, AiError> {
    let embeddings = embedder.embed(vec![content.to_owned()]).await?;

    let Some(embedding) = embeddings.first() else {
        return Err(AiError::InvalidResponse(
            "no embedding generated for content".to_string(),
        ));
    };

    Ok(embedding.to_owned())
}
