//! Image generation through the OpenAI images endpoint (JSON body, base64
//! response).

use super::transport_error;
use crate::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    organization: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiImageClient {
    pub fn new(api_key: String, organization: Option<String>, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            organization,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Issue one image generation call and decode the base64 payload of the
    /// first data entry into raw image bytes.
    pub async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            size: None,
            background: None,
            quality: None,
        };
        self.generate_image_with(request).await
    }

    /// Same as [`generate_image`](Self::generate_image) but with explicit
    /// size/background/quality parameters.
    pub async fn generate_image_with(&self, request: ImageGenerationRequest) -> Result<Vec<u8>> {
        tracing::debug!("Sending image generation request to OpenAI");

        let url = format!("{}/v1/images/generations", self.base_url);
        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key));
        if let Some(org) = &self.organization {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder.json(&request).send().await.map_err(|e| {
            tracing::error!("Failed to send image request to OpenAI: {}", e);
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
            tracing::error!("OpenAI API image error (status {}): {}", status, body);
            return Err(transport_error(status, content_type.as_deref(), &body));
        }

        let parsed: ImageGenerationResponse =
            serde_json::from_str(&body).map_err(|e| Error::Decode {
                context: format!("OpenAI image generation: {}", e),
                body: body.clone(),
            })?;

        let b64_json = parsed
            .data
            .first()
            .and_then(|entry| entry.b64_json.as_deref())
            .ok_or_else(|| Error::Decode {
                context: "OpenAI image generation: no b64_json in first data entry".to_string(),
                body: body.clone(),
            })?;

        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(b64_json)
            .map_err(|e| Error::Decode {
                context: format!("OpenAI image generation: invalid base64: {}", e),
                body,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> OpenAiImageClient {
        OpenAiImageClient::new("sk-test".to_string(), None, DEFAULT_IMAGE_MODEL.to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_generate_image_decodes_b64_response() {
        let server = MockServer::start().await;

        use base64::Engine as _;
        let fake_image = vec![0x89, 0x50, 0x4E, 0x47];
        let b64 = base64::engine::general_purpose::STANDARD.encode(&fake_image);

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_string_contains("\"model\":\"gpt-image-1\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "b64_json": b64 }]
            })))
            .mount(&server)
            .await;

        let bytes = test_client(&server).generate_image("a knight").await.unwrap();
        assert_eq!(bytes, fake_image);
    }

    #[tokio::test]
    async fn test_optional_parameters_are_omitted_from_json() {
        let server = MockServer::start().await;

        use base64::Engine as _;
        let b64 = base64::engine::general_purpose::STANDARD.encode([0u8]);

        // A request without size/background/quality must not serialize the keys.
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(wiremock::matchers::body_json(serde_json::json!({
                "model": "gpt-image-1",
                "prompt": "a cat"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "b64_json": b64 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server).generate_image("a cat").await.unwrap();
    }

    #[tokio::test]
    async fn test_explicit_parameters_are_sent() {
        let server = MockServer::start().await;

        use base64::Engine as _;
        let b64 = base64::engine::general_purpose::STANDARD.encode([0u8]);

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(body_string_contains("\"size\":\"1024x1024\""))
            .and(body_string_contains("\"background\":\"transparent\""))
            .and(body_string_contains("\"quality\":\"high\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "b64_json": b64 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ImageGenerationRequest {
            model: DEFAULT_IMAGE_MODEL.to_string(),
            prompt: "a tabby gray cat".to_string(),
            size: Some("1024x1024".to_string()),
            background: Some("transparent".to_string()),
            quality: Some("high".to_string()),
        };
        test_client(&server).generate_image_with(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_organization_header_is_attached_when_configured() {
        let server = MockServer::start().await;

        use base64::Engine as _;
        let b64 = base64::engine::general_purpose::STANDARD.encode([0u8]);

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("OpenAI-Organization", "org-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "b64_json": b64 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiImageClient::new(
            "sk-test".to_string(),
            Some("org-42".to_string()),
            DEFAULT_IMAGE_MODEL.to_string(),
        )
        .with_base_url(server.uri());

        client.generate_image("a slime").await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_data_entry_is_decode_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let err = test_client(&server).generate_image("a coin").await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_invalid_base64_is_decode_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "b64_json": "!!! not base64 !!!" }]
            })))
            .mount(&server)
            .await;

        let err = test_client(&server).generate_image("a coin").await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_api_error_is_transport_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let err = test_client(&server).generate_image("a coin").await.unwrap_err();
        assert!(matches!(err, Error::Transport { status: 500, .. }));
    }
}
