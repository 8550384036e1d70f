use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use super::ChatBackend;
use crate::{CallOptions, ChatResponse, ClientConfig, Error, Result};

const SYSTEM_INSTRUCTION: &str = "You are an assistant specialized in logic and argumentation. \
     Help the user examine claims, evidence, reasoning structure, and logical fallacies.";

// Literal fallback carried over from the upstream contract, typo included.
const NO_CONTENT_FALLBACK: &str = "No response from OpenIA API.";

/// Provider-backed chat: one chat-completion request per message, no history.
pub struct OpenAiChatBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::configuration("provider chat mode requires an API key"))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.provider_base_url.clone(),
            api_key,
            model: config.model.clone(),
        })
    }

    /// First choice's message content, or the literal fallback when the
    /// provider returned no usable content.
    fn extract_content(payload: &Value) -> String {
        payload["choices"][0]["message"]["content"]
            .as_str()
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_CONTENT_FALLBACK)
            .to_string()
    }
}

#[async_trait]
impl ChatBackend for OpenAiChatBackend {
    async fn send(&self, message: &str, opts: &CallOptions) -> Result<ChatResponse> {
        let endpoint = format!("{}/v1/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": message },
            ],
        });

        let mut request = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(deadline) = opts.timeout {
            request = request.timeout(deadline);
        }

        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| Error::provider(format!("chat completion request failed: {e}")))?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::provider(format!(
                    "chat provider returned HTTP {}",
                    status.as_u16()
                )));
            }
            response
                .json::<Value>()
                .await
                .map_err(|e| Error::provider(format!("invalid chat completion response: {e}")))
        };

        let payload = match &opts.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(Error::Cancelled),
                outcome = exchange => outcome,
            },
            None => exchange.await,
        }
        .map_err(|err| {
            tracing::error!(error = %err, "chat request failed");
            err
        })?;

        Ok(ChatResponse {
            message: Self::extract_content(&payload),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_content_reads_first_choice() {
        let payload = json!({
            "choices": [ { "message": { "content": "hello" } } ]
        });
        assert_eq!(OpenAiChatBackend::extract_content(&payload), "hello");
    }

    #[test]
    fn extract_content_falls_back_on_missing_or_empty() {
        let empty_choices = json!({ "choices": [] });
        assert_eq!(
            OpenAiChatBackend::extract_content(&empty_choices),
            NO_CONTENT_FALLBACK
        );

        let empty_string = json!({
            "choices": [ { "message": { "content": "" } } ]
        });
        assert_eq!(
            OpenAiChatBackend::extract_content(&empty_string),
            NO_CONTENT_FALLBACK
        );
    }
}
