//! Configuration management

use std::fmt;
use tracing::debug;

use crate::core::errors::{QuizError, Result};

/// Organization identifier variable
pub const ORG_ENV: &str = "OPENAI_ORG_NAME";
/// API key variable
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Optional chat-completions URL override
pub const API_BASE_ENV: &str = "OPENAI_API_BASE";

/// Chat-completions URL used unless overridden
pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Credentials and endpoint for the completion API
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Organization identifier, sent as `OpenAI-Organization`
    pub organization: String,
    /// Secret key, sent as a bearer token
    pub api_key: String,
    /// Chat-completions URL
    pub api_endpoint: String,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("organization", &self.organization)
            .field("api_key", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .finish()
    }
}

impl ApiConfig {
    /// Config for the default endpoint
    pub fn new(organization: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            api_key: api_key.into(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }

    /// Point at another chat-completions URL
    pub fn with_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    /// Resolve configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let organization = required(&lookup, ORG_ENV)?;
        let api_key = required(&lookup, API_KEY_ENV)?;

        let api_endpoint = lookup(API_BASE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        debug!("Using completion endpoint {}", api_endpoint);

        let config = Self {
            organization,
            api_key,
            api_endpoint,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.organization.trim().is_empty() {
            return Err(QuizError::config(format!("{} is required", ORG_ENV)));
        }

        if self.api_key.trim().is_empty() {
            return Err(QuizError::config(format!("{} is required", API_KEY_ENV)));
        }

        if self.api_endpoint.trim().is_empty() {
            return Err(QuizError::config("API endpoint is required"));
        }

        Ok(())
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            QuizError::config(format!(
                "{} environment variable is missing or empty",
                key
            ))
        })
}
