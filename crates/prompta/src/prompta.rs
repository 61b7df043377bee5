pub mod error;
pub mod executor;
pub mod pool;
pub mod ranking;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use futures::{future::join_all, FutureExt};
use prompta_ai::{Completion, Embedder};
use prompta_domain::recommendation::{Recommendation, RecommendationRecord};
use prompta_store::RecommendationStore;

use crate::{
    executor::{Executor, TokioExecutor},
    utils::explanation::generate_explanation,
};

pub use error::RecommendError;
pub use pool::CandidatePool;
pub use ranking::TOP_K;
pub use utils::explanation::FALLBACK_EXPLANATION;

/// Identity recorded for callers that present no session.
pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct RecommendRequest {
    pub domain: String,
    pub prompts: Vec<String>,
}

#[derive(Clone)]
pub struct Recommender {
    pool: Arc<CandidatePool>,
    embedder: Arc<dyn Embedder>,
    completion: Arc<dyn Completion>,
    store: Arc<dyn RecommendationStore>,
    executor: Arc<dyn Executor>,
}

impl Recommender {
    pub fn builder() -> RecommenderBuilder {
        RecommenderBuilder {
            pool: None,
            embedder: None,
            completion: None,
            store: None,
            executor: None,
        }
    }

    /// Runs one end-to-end recommendation cycle: rank the unused pool
    /// candidates against `request.domain`, explain the winners, persist the
    /// outcome without gating the response on it, and return the list.
    pub async fn recommend(
        &self,
        requester: Option<String>,
        request: RecommendRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let domain = request.domain.trim().to_string();
        if domain.is_empty() {
            return Err(RecommendError::EmptyDomain);
        }

        let user = requester.unwrap_or_else(|| ANONYMOUS_USER.to_string());

        let ranked =
            ranking::rank(&self.embedder, &self.pool, &domain, &request.prompts).await?;

        let explanations = join_all(
            ranked
                .iter()
                .map(|scored| generate_explanation(&self.completion, &scored.prompt, &domain)),
        )
        .await;

        let recommendations: Vec<Recommendation> = ranked
            .into_iter()
            .zip(explanations)
            .map(|(scored, explanation)| Recommendation {
                prompt: scored.prompt,
                similarity: scored.similarity,
                explanation,
            })
            .collect();

        self.persist(user, domain, recommendations.clone());

        Ok(recommendations)
    }

    pub async fn history(&self, user: &str) -> Result<Vec<RecommendationRecord>> {
        Ok(self.store.list_for_user(user).await?)
    }

    // Best-effort write, detached from the response path. Failures are
    // observed in the logs and nowhere else.
    fn persist(&self, user: String, domain: String, recommendations: Vec<Recommendation>) {
        let store = self.store.clone();

        self.executor.spawn(
            async move {
                let records: Vec<RecommendationRecord> = recommendations
                    .into_iter()
                    .map(|recommendation| {
                        RecommendationRecord::new(user.clone(), domain.clone(), recommendation)
                    })
                    .collect();

                match store.save_many(records).await {
                    Ok(count) => {
                        tracing::debug!("Saved {} recommendations for {}", count, user)
                    }
                    Err(e) => tracing::warn!("Failed to save recommendations: {}", e),
                }
            }
            .boxed(),
        );
    }
}

pub struct RecommenderBuilder {
    pool: Option<CandidatePool>,
    embedder: Option<Arc<dyn Embedder>>,
    completion: Option<Arc<dyn Completion>>,
    store: Option<Arc<dyn RecommendationStore>>,
    executor: Option<Arc<dyn Executor>>,
}

impl RecommenderBuilder {
    pub fn with_pool(mut self, pool: CandidatePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn with_embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn with_completion(mut self, completion: Arc<dyn Completion>) -> Self {
        self.completion = Some(completion);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn RecommendationStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn build(self) -> Recommender {
        Recommender {
            pool: Arc::new(self.pool.unwrap_or_default()),
            embedder: self.embedder.expect("embedder is required"),
            completion: self.completion.expect("completion is required"),
            store: self.store.expect("store is required"),
            executor: self
                .executor
                .unwrap_or_else(|| Arc::new(TokioExecutor)),
        }
    }
}
