use std::sync::Arc;

use indoc::indoc;
use prompta_ai::{Completion, CompletionRequest};

/// Substitute rationale used whenever generation fails or comes back empty.
pub const FALLBACK_EXPLANATION: &str = "Highly relevant to your domain";

pub const EXPLANATION_MAX_TOKENS: u32 = 100;
pub const EXPLANATION_TEMPERATURE: f32 = 0.7;

const EXPLANATION_SYSTEM_PROMPT: &str = indoc! {"
    You're a helpful AI assistant. For the given prompt and domain, generate
    a concise one-sentence explanation of why the prompt is relevant to that
    domain.
"};

const EXPLANATION_PROMPT: &str = indoc! {"
    Prompt: {{PROMPT}}
    Domain: {{DOMAIN}}
"};

/// Asks the completion provider why `prompt` matters for `domain`. Failures
/// and empty content degrade to the fixed fallback string; they never
/// propagate.
pub async fn generate_explanation(
    completion: &Arc<dyn Completion>,
    prompt: &str,
    domain: &str,
) -> String {
    let request = CompletionRequest {
        system: Some(EXPLANATION_SYSTEM_PROMPT.to_string()),
        prompt: EXPLANATION_PROMPT
            .replace("{{PROMPT}}", prompt)
            .replace("{{DOMAIN}}", domain),
        max_tokens: Some(EXPLANATION_MAX_TOKENS),
        temperature: Some(EXPLANATION_TEMPERATURE),
    };

    match completion.complete(request).await {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                tracing::warn!("Explanation generation returned empty content");
                FALLBACK_EXPLANATION.to_string()
            } else {
                text.to_string()
            }
        }
        Err(e) => {
            tracing::warn!("Failed to generate explanation: {}", e);
            FALLBACK_EXPLANATION.to_string()
        }
    }
}
