//! OpenAI Chat Completions client
//!
//! A single blocking request per call. The interaction cycle that issues it
//! waits for the reply; the configured timeout bounds that wait.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{CompletionClient, CompletionError};
use crate::config::CompletionSettings;

/// OpenAI API client
pub struct OpenAiClient {
    model: String,
    temperature: f32,
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// reqwest is built without a default TLS crypto provider
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

impl OpenAiClient {
    /// Create a new client from completion settings and a resolved credential
    pub fn new(settings: &CompletionSettings, api_key: String) -> Result<Self, CompletionError> {
        debug!(model = %settings.model, base_url = %settings.base_url, "OpenAiClient::new");
        install_crypto_provider();

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("taskcat/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Pull the reply text out of a Chat Completions response body
fn extract_content(body: &str) -> Result<String, CompletionError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::InvalidResponse("response has no choices".to_string()))?;

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(CompletionError::InvalidResponse(
            "response message has no content".to_string(),
        )),
    }
}

/// Error bodies look like `{"error": {"message": "..."}}`; fall back to raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "complete: called");
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(prompt))
            .send()?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response.text()?;

        if !(200..300).contains(&status) {
            warn!(status, "complete: service returned an error");
            return Err(CompletionError::from_status(
                status,
                error_message(&body),
                retry_after,
            ));
        }

        let content = extract_content(&body)?;
        debug!(reply_len = content.len(), "complete: success");
        Ok(content)
    }
}
