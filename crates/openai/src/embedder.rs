use async_trait::async_trait;
use prompta_ai::{AiError, Embedder};
use prompta_domain::embedding::Embedding;
use serde::Serialize;

use crate::{http_client, read_json, require_api_key, OPENAI_API_BASE};

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

#[derive(Serialize)]
struct EmbeddingsPayload<'a> {
    input: &'a [String],
    model: &'a str,
    encoding_format: &'a str,
}

pub struct OpenAiEmbedder {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiEmbedder {
    pub fn builder() -> OpenAiEmbedderBuilder {
        OpenAiEmbedderBuilder {
            api_key: None,
            base_url: None,
            model: None,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

pub struct OpenAiEmbedderBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

impl OpenAiEmbedderBuilder {
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn build(self) -> Result<OpenAiEmbedder, AiError> {
        Ok(OpenAiEmbedder {
            http: http_client()?,
            api_key: self.api_key,
            base_url: self.base_url.unwrap_or_else(|| OPENAI_API_BASE.to_string()),
            model: self
                .model
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
        })
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Embedding>, AiError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let api_key = require_api_key(&self.api_key)?;

        let response = self
            .http
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(api_key)
            .json(&EmbeddingsPayload {
                input: &texts,
                model: &self.model,
                encoding_format: "float",
            })
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        let body = read_json(response).await?;
        parse_embeddings(&body, texts.len())
    }
}

fn parse_embeddings(
    body: &serde_json::Value,
    expected: usize,
) -> Result<Vec<Embedding>, AiError> {
    let data = body["data"]
        .as_array()
        .ok_or_else(|| AiError::InvalidResponse("missing data array".to_string()))?;

    if data.len() != expected {
        return Err(AiError::InvalidResponse(format!(
            "expected {} embeddings, got {}",
            expected,
            data.len()
        )));
    }

    data.iter()
        .enumerate()
        .map(|(index, item)| {
            let values = item["embedding"]
                .as_array()
                .ok_or_else(|| {
                    AiError::InvalidResponse(format!("invalid embedding for input {}", index))
                })?
                .iter()
                .map(|v| v.as_f64().unwrap_or(0.0) as f32)
                .collect::<Vec<f32>>();

            Ok(Embedding::from(values))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_index_aligned_embeddings() {
        let body = json!({
            "data": [
                { "embedding": [0.1, 0.2] },
                { "embedding": [0.3, 0.4] },
            ]
        });

        let embeddings = parse_embeddings(&body, 2).unwrap();
        assert_eq!(embeddings.len(), 2);
        assert_eq!(embeddings[0].as_slice(), &[0.1, 0.2]);
        assert_eq!(embeddings[1].as_slice(), &[0.3, 0.4]);
    }

    #[test]
    fn rejects_count_mismatch() {
        let body = json!({ "data": [ { "embedding": [0.1] } ] });
        assert!(matches!(
            parse_embeddings(&body, 2),
            Err(AiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn rejects_missing_data_array() {
        let body = json!({ "error": { "message": "nope" } });
        assert!(matches!(
            parse_embeddings(&body, 1),
            Err(AiError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn embed_without_api_key_is_a_configuration_error() {
        let embedder = OpenAiEmbedder::builder().build().unwrap();
        let result = embedder.embed(vec!["web agency".into()]).await;
        assert!(matches!(result, Err(AiError::Configuration(_))));
    }

    #[tokio::test]
    async fn embed_with_no_inputs_skips_the_request() {
        let embedder = OpenAiEmbedder::builder().build().unwrap();
        assert!(embedder.embed(Vec::new()).await.unwrap().is_empty());
    }
}
