use async_trait::async_trait;
use prompta_ai::{AiError, Completion, CompletionRequest};
use serde::Serialize;

use crate::{http_client, read_json, require_api_key, OPENAI_API_BASE};

pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

pub struct OpenAiCompletion {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiCompletion {
    pub fn builder() -> OpenAiCompletionBuilder {
        OpenAiCompletionBuilder {
            api_key: None,
            base_url: None,
            model: None,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

pub struct OpenAiCompletionBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

impl OpenAiCompletionBuilder {
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

    pub fn build(self) -> Result<OpenAiCompletion, AiError> {
        Ok(OpenAiCompletion {
            http: http_client()?,
            api_key: self.api_key,
            base_url: self.base_url.unwrap_or_else(|| OPENAI_API_BASE.to_string()),
            model: self
                .model
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
        })
    }
}

#[async_trait]
impl Completion for OpenAiCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AiError> {
        let api_key = require_api_key(&self.api_key)?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&ChatPayload {
                model: &self.model,
                messages,
                max_tokens: request.max_tokens,
                temperature: request.temperature,
            })
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        let body = read_json(response).await?;
        Ok(extract_content(&body))
    }
}

// Missing or null content is returned as an empty string; the caller decides
// whether that counts as a failure.
fn extract_content(body: &serde_json::Value) -> String {
    body["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
