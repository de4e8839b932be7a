//! HTTP clients for the generation endpoints.
//!
//! One module per provider. Each client owns a reqwest client with a bounded
//! timeout, attaches the credential as a bearer header, performs exactly one
//! POST per call and decodes the provider's response shape. No retries.

pub mod openai;
pub mod openrouter;
pub mod stability;

pub use openai::OpenAiImageClient;
pub use openrouter::{ChatReply, OpenRouterClient};
pub use stability::{GeneratedImage, StabilityClient, TextToImageParams};

use crate::Error;
use reqwest::StatusCode;

const ERROR_BODY_LIMIT: usize = 500;

/// Build a transport error from a non-success response: the detail is the
/// parsed JSON error body when the server sent JSON, otherwise the text body
/// truncated for display.
pub(crate) fn transport_error(status: StatusCode, content_type: Option<&str>, body: &str) -> Error {
    let is_json = content_type
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    let detail = if is_json {
        serde_json::from_str::<serde_json::Value>(body)
            .map(|value| value.to_string())
            .unwrap_or_else(|_| serde_json::json!({ "error": body }).to_string())
    } else {
        truncate(body, ERROR_BODY_LIMIT)
    };

    Error::Transport {
        status: status.as_u16(),
        detail,
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    // Back off to a char boundary so we never split a code point.
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
