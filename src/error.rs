//! Error handling and custom error types
//!
//! Provides unified error handling across the generation binaries using
//! thiserror. Every variant is fatal: the first failing asset aborts the run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing credential: set {0} in your environment or in a .env file")]
    MissingCredential(String),

    #[error("Generation failed {status}: {detail}")]
    Transport { status: u16, detail: String },

    #[error("Generation rejected by content filter (finish-reason: {0})")]
    ContentPolicy(String),

    #[error("Unexpected response shape ({context}). Raw response: {body}")]
    Decode { context: String, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
