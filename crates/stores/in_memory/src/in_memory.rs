use std::{collections::HashMap, sync::Arc};

use prompta_domain::recommendation::RecommendationRecord;
use prompta_store::{RecommendationStore, StoreError};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<Mutex<HashMap<String, Vec<RecommendationRecord>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecommendationStore for InMemoryStore {
    async fn save_many(&self, records: Vec<RecommendationRecord>) -> Result<usize, StoreError> {
        let mut all = self.records.lock().await;
        let count = records.len();
        for record in records {
            all.entry(record.user.clone()).or_default().push(record);
        }
        Ok(count)
    }

    async fn list_for_user(&self, user: &str) -> Result<Vec<RecommendationRecord>, StoreError> {
        let all = self.records.lock().await;
        let mut records = all.get(user).cloned().unwrap_or_default();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use prompta_domain::recommendation::Recommendation;

    use super::*;

    fn record(user: &str, prompt: &str) -> RecommendationRecord {
        RecommendationRecord::new(
            user,
            "online bookstore",
            Recommendation {
                prompt: prompt.into(),
                similarity: 0.42,
                explanation: "Highly relevant to your domain".into(),
            },
        )
    }

    #[tokio::test]
    async fn save_many_returns_written_count() {
        let store = InMemoryStore::new();

        let count = store
            .save_many(vec![record("a@x.com", "one"), record("a@x.com", "two")])
            .await
            .unwrap();

        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn list_for_user_filters_by_user() {
        let store = InMemoryStore::new();
        store
            .save_many(vec![record("a@x.com", "one"), record("b@x.com", "two")])
            .await
            .unwrap();

        let records = store.list_for_user("a@x.com").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prompt, "one");

        let records = store.list_for_user("nobody@x.com").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn list_for_user_returns_newest_first() {
        let store = InMemoryStore::new();
        let older = record("a@x.com", "older");
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newer = record("a@x.com", "newer");
        store.save_many(vec![older, newer]).await.unwrap();

        let records = store.list_for_user("a@x.com").await.unwrap();
        assert_eq!(records[0].prompt, "newer");
        assert_eq!(records[1].prompt, "older");
    }
}
