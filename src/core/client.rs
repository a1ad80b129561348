//! Chat-completion client

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::ApiConfig;
use crate::core::errors::{QuizError, Result};
use crate::core::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Anything that can turn a system prompt and a text into one completion
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit one request and return the first completion's text
    async fn complete(&self, system_prompt: &str, user_text: &str, max_tokens: u32)
        -> Result<String>;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
        max_tokens: u32,
    ) -> Result<String> {
        (**self).complete(system_prompt, user_text, max_tokens).await
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl OpenAiClient {
    /// Create a new client. No request timeout is set.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, config })
    }

    /// Send the request and decode the response body
    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let response = self
            .client
            .post(&self.config.api_endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("OpenAI-Organization", &self.config.organization)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| QuizError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(QuizError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| QuizError::InvalidResponseError {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
        max_tokens: u32,
    ) -> Result<String> {
        let body = ChatCompletionRequest::new(system_prompt, user_text, max_tokens);

        debug!(
            "Sending {} ({} chars, max_tokens={}) to {}",
            body.model,
            user_text.len(),
            max_tokens,
            self.config.api_endpoint
        );

        let response = self.send_request(&body).await?;

        if let Some(usage) = response.usage {
            debug!(
                "Token usage: prompt={} completion={} total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| QuizError::InvalidResponseError {
                message: "No choices in response".to_string(),
            })?;

        if let Some(reason) = &choice.finish_reason {
            info!("Completion finished: {}", reason);
        }

        choice
            .message
            .content
            .ok_or_else(|| QuizError::InvalidResponseError {
                message: "No content in first choice".to_string(),
            })
    }
}
