//! pixelsmith - generates pixel-art sprite assets and helper text for a game
//! prototype by calling third-party generative AI HTTP APIs.
//!
//! Three thin binaries share this library: a chat probe through OpenRouter,
//! batch sprite generation through the OpenAI images endpoint, and batch
//! sprite generation through the Stability multipart endpoint. Each run is
//! strictly sequential and aborts on the first failing asset.

pub mod ai;
pub mod artifact;
pub mod assets;
pub mod config;
pub mod error;
pub mod prompts;
pub mod runner;
pub mod think;

pub use error::{Error, Result};
