pub mod completion;
pub mod embedder;

pub use completion::OpenAiCompletion;
pub use embedder::OpenAiEmbedder;

use std::time::Duration;

use prompta_ai::AiError;

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn http_client() -> Result<reqwest::Client, AiError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AiError::Request(format!("Failed to create HTTP client: {}", e)))
}

pub(crate) fn require_api_key(api_key: &Option<String>) -> Result<&str, AiError> {
    api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AiError::Configuration("OPENAI_API_KEY is not set".to_string()))
}

pub(crate) async fn read_json(
    response: reqwest::Response,
) -> Result<serde_json::Value, AiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| AiError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_api_key_rejects_missing_and_empty() {
        assert!(matches!(
            require_api_key(&None),
            Err(AiError::Configuration(_))
        ));
        assert!(matches!(
            require_api_key(&Some(String::new())),
            Err(AiError::Configuration(_))
        ));
        assert_eq!(require_api_key(&Some("sk-test".into())).unwrap(), "sk-test");
    }
}
