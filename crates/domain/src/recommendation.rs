use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ranked suggestion returned to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub prompt: String,
    pub similarity: f32,
    pub explanation: String,
}

/// A recommendation as persisted for a caller's history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub user: String,
    pub domain: String,
    pub prompt: String,
    pub similarity: f32,
    pub explanation: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl RecommendationRecord {
    pub fn new(
        user: impl Into<String>,
        domain: impl Into<String>,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            domain: domain.into(),
            prompt: recommendation.prompt,
            similarity: recommendation.similarity,
            explanation: recommendation.explanation,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_recommendation_fields() {
        let record = RecommendationRecord::new(
            "user@example.com",
            "web development agency",
            Recommendation {
                prompt: "SEO optimization techniques".into(),
                similarity: 0.87,
                explanation: "Search visibility drives agency leads.".into(),
            },
        );

        assert_eq!(record.user, "user@example.com");
        assert_eq!(record.domain, "web development agency");
        assert_eq!(record.prompt, "SEO optimization techniques");
        assert_eq!(record.similarity, 0.87);
    }

    #[test]
    fn record_serializes_timestamp_as_milliseconds() {
        let record = RecommendationRecord::new(
            "anonymous",
            "fintech",
            Recommendation {
                prompt: "Revenue optimization".into(),
                similarity: 0.5,
                explanation: "Highly relevant to your domain".into(),
            },
        );

        let value = serde_json::to_value(&record).unwrap();
        assert!(value["created_at"].is_i64());
        assert!(value["id"].is_string());
    }
}
