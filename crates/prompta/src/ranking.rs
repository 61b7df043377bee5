use std::{cmp::Ordering, collections::HashSet, sync::Arc};

use futures::future::try_join_all;
use prompta_ai::{AiError, Embedder};

use crate::{
    pool::CandidatePool,
    utils::{embedding::generate_embedding, similarity::cosine_similarity},
};

/// How many candidates survive ranking.
pub const TOP_K: usize = 5;

#[derive(Clone, Debug)]
pub struct ScoredPrompt {
    pub prompt: String,
    pub similarity: f32,
}

/// Scores every pool candidate the caller does not already have against the
/// domain and returns at most [`TOP_K`] of them, best first.
///
/// The domain embedding is fetched first since nothing can be scored without
/// it; candidate embeddings then fan out concurrently. Any embedding failure
/// fails the whole ranking, there is no partial result.
pub async fn rank(
    embedder: &Arc<dyn Embedder>,
    pool: &CandidatePool,
    domain: &str,
    existing_prompts: &[String],
) -> Result<Vec<ScoredPrompt>, AiError> {
    let taken: HashSet<String> = existing_prompts
        .iter()
        .map(|prompt| prompt.trim().to_lowercase())
        .collect();

    let unused: Vec<&str> = pool
        .iter()
        .filter(|candidate| !taken.contains(&candidate.trim().to_lowercase()))
        .collect();

    let domain_embedding = generate_embedding(embedder, domain).await?;

    let candidate_embeddings = try_join_all(
        unused
            .iter()
            .map(|candidate| generate_embedding(embedder, candidate)),
    )
    .await?;

    let mut scored: Vec<ScoredPrompt> = unused
        .iter()
        .zip(candidate_embeddings.iter())
        .map(|(candidate, embedding)| ScoredPrompt {
            prompt: (*candidate).to_string(),
            similarity: cosine_similarity(&domain_embedding, embedding),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(TOP_K);

    Ok(scored)
}
