//! Image generation through the Stability multipart endpoint.
//!
//! The SD3/SD3.5 "ultra" endpoint expects multipart/form-data even for plain
//! text fields, answers with raw image bytes on success and carries the
//! finish reason and seed in response headers.

use super::transport_error;
use crate::{Error, Result};
use reqwest::multipart::Form;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.stability.ai";
const GENERATE_PATH: &str = "/v2beta/stable-image/generate/ultra";

/// Finish-reason header value signalling the NSFW classifier fired.
const CONTENT_FILTERED: &str = "CONTENT_FILTERED";

/// Parameters for one text-to-image call. `None` and empty-string values are
/// omitted from the encoded form entirely, never sent as empty fields.
#[derive(Debug, Clone, Default)]
pub struct TextToImageParams {
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub aspect_ratio: Option<String>,
    pub seed: Option<u64>,
    pub output_format: Option<String>,
    pub style_preset: Option<String>,
}

impl TextToImageParams {
    /// Flatten into `(field name, value)` pairs, applying the omission rule.
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        push_field(&mut fields, "prompt", Some(self.prompt.clone()));
        push_field(&mut fields, "negative_prompt", self.negative_prompt.clone());
        push_field(&mut fields, "aspect_ratio", self.aspect_ratio.clone());
        push_field(&mut fields, "seed", self.seed.map(|s| s.to_string()));
        push_field(&mut fields, "output_format", self.output_format.clone());
        push_field(&mut fields, "style_preset", self.style_preset.clone());

        fields
    }
}

fn push_field(fields: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            fields.push((name, value));
        }
    }
}

/// Decoded result of one generation call: the image bytes plus the optional
/// header metadata used for logging and filename construction.
#[derive(Debug)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub finish_reason: Option<String>,
    pub seed: Option<String>,
}

pub struct StabilityClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl StabilityClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Issue one text-to-image call. An HTTP 200 whose finish-reason header
    /// is the content-filter sentinel is a [`Error::ContentPolicy`] failure,
    /// not a success.
    pub async fn generate(&self, params: &TextToImageParams) -> Result<GeneratedImage> {
        let mut form = Form::new();
        for (name, value) in params.to_fields() {
            form = form.text(name, value);
        }

        tracing::debug!("Sending text-to-image request to Stability");

        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "image/*")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Stability: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await?;
            tracing::error!("Stability API error (status {}): {}", status, body);
            return Err(transport_error(status, content_type.as_deref(), &body));
        }

        let finish_reason = response
            .headers()
            .get("finish-reason")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let seed = response
            .headers()
            .get("seed")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if finish_reason.as_deref() == Some(CONTENT_FILTERED) {
            return Err(Error::ContentPolicy(CONTENT_FILTERED.to_string()));
        }

        let bytes = response.bytes().await?.to_vec();

        Ok(GeneratedImage {
            bytes,
            finish_reason,
            seed,
        })
    }
}
