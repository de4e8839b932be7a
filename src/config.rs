//! Per-endpoint configuration loaded from the environment.
//!
//! Each binary constructs its own config up front and passes it to the
//! client explicitly. Credentials are read once at startup; a missing
//! credential is fatal before any network call is made.

use crate::{Error, Result};

/// Return the first non-empty (trimmed) value among `names`, using `lookup`
/// to resolve each name. Priority is left to right.
fn first_non_empty<F>(names: &[&str], lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Resolve a required credential from a prioritized list of environment
/// variables. Empty values count as absent.
pub fn require_env(names: &[&str]) -> Result<String> {
    first_non_empty(names, env_lookup).ok_or_else(|| Error::MissingCredential(names.join(" or ")))
}

/// Resolve an optional value from a prioritized list of environment variables.
pub fn optional_env(names: &[&str]) -> Option<String> {
    first_non_empty(names, env_lookup)
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
}

impl OpenRouterConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: require_env(&["OPENROUTER_API_KEY"])?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Optional organization id, sent as the `OpenAI-Organization` header.
    pub organization: Option<String>,
}

impl OpenAiConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: require_env(&["OPENAI_API_KEY", "OPENAI_KEY"])?,
            organization: optional_env(&["OPENAI_ORG_ID", "OPENAI_ORGANIZATION"]),
        })
    }
}

#[derive(Debug, Clone)]
pub struct StabilityConfig {
    pub api_key: String,
}

impl StabilityConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: require_env(&["STABILITY_API_KEY"])?,
        })
    }
}
