//! Chat completions through the OpenRouter aggregator.

use super::transport_error;
use crate::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api";

pub const DEFAULT_CHAT_MODEL: &str = "openai/gpt-5-chat";

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Encourages models that support it to surface chain-of-thought markers.
    pub extra_body: ExtraBody,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtraBody {
    pub reasoning: Reasoning,
}

#[derive(Debug, Serialize)]
pub struct Reasoning {
    pub effort: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Outcome of one chat call. An empty `choices` list is not a failure; the
/// raw body is kept so callers can print it for diagnostics.
#[derive(Debug)]
pub struct ChatReply {
    pub content: Option<String>,
    pub raw: String,
}

pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue one chat completion for `prompt` as a single user message.
    pub async fn chat(&self, prompt: &str) -> Result<ChatReply> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
            }],
            extra_body: ExtraBody {
                reasoning: Reasoning {
                    effort: "high".to_string(),
                },
            },
            temperature: 0.7,
            max_tokens: 2048,
        };

        tracing::debug!("Sending chat completion request to OpenRouter");

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to OpenRouter: {}", e);
                e
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("OpenRouter API error (status {}): {}", status, body);
            return Err(transport_error(status, content_type.as_deref(), &body));
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| Error::Decode {
                context: format!("OpenRouter chat completion: {}", e),
                body: body.clone(),
            })?;

        let content = parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone());

        Ok(ChatReply { content, raw: body })
    }
}
