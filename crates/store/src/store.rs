pub mod error;

pub use async_trait::async_trait;
pub use error::StoreError;

use prompta_domain::recommendation::RecommendationRecord;

#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Persists a batch of records, returning how many were written.
    async fn save_many(&self, records: Vec<RecommendationRecord>) -> Result<usize, StoreError>;

    /// Returns a caller's saved records, newest first.
    async fn list_for_user(&self, user: &str) -> Result<Vec<RecommendationRecord>, StoreError>;
}
