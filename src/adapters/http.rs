use crate::domain::ports::{CompletionProvider, ProviderConfig};
use crate::utils::error::{Result, StudioError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Completion provider speaking an OpenAI-compatible `chat/completions`
/// endpoint. The instruction travels as a single user message; the completion
/// comes back in `choices[0].message.content`.
#[derive(Debug, Clone)]
pub struct HttpCompletionProvider {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl HttpCompletionProvider {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            timeout: None,
        }
    }

    pub fn from_config(config: &impl ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint().to_string(),
            model: config.model().to_string(),
            api_key: config.api_key().map(str::to_string),
            timeout: config.timeout_seconds().map(Duration::from_secs),
        }
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, instruction: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": instruction}],
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 POST {} (model: {})", self.endpoint, self.model);
        let response = request.send().await?;
        tracing::debug!("📡 Completion response status: {}", response.status());

        if !response.status().is_success() {
            return Err(StudioError::ProviderError {
                message: format!(
                    "completion endpoint returned status {}",
                    response.status()
                ),
            });
        }

        let payload: Value = response.json().await?;
        completion_text(&payload).ok_or_else(|| StudioError::ProviderError {
            message: "completion payload is missing choices[0].message.content".to_string(),
        })
    }
}

fn completion_text(payload: &Value) -> Option<String> {
    payload
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
