//! Core data models for quiz generation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Chat model every request is sent to
pub const MODEL: &str = "gpt-3.5-turbo-16k";

/// Sampling temperature for every request
pub const TEMPERATURE: f32 = 0.0;

/// Source file read when `-f` is not given
pub const DEFAULT_SOURCE_FILE: &str = "article.txt";
/// Destination file written when `-f` is not given
pub const DEFAULT_DESTINATION_FILE: &str = "questions.txt";
/// Generation cap when `-t` is not given
pub const DEFAULT_MAX_TOKENS: u32 = 8000;
/// Tutor language when `-lang` is not given
pub const DEFAULT_LANGUAGE: &str = "French";

/// Message role in a chat payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructional context
    System,
    /// Content to operate on
    User,
}

/// Role-tagged chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who the message is from
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Instruction message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Message carrying the text to work on
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat-completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// System message, then user message
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Generation cap
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Build the fixed two-message request: system prompt first, then the text
    pub fn new(system_prompt: &str, user_text: &str, max_tokens: u32) -> Self {
        Self {
            model: MODEL.to_string(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_text)],
            temperature: TEMPERATURE,
            max_tokens,
        }
    }
}

/// Chat-completion response body, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Candidate completions; only the first is used
    pub choices: Vec<Choice>,
    /// Token accounting, when reported
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One candidate completion
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Generated message
    pub message: ResponseMessage,
    /// Why generation stopped (`stop`, `length`, ...)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Generated message of a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Generated text; may be null
    #[serde(default)]
    pub content: Option<String>,
}

/// Token accounting reported by the endpoint
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    /// Tokens in the two messages
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens generated
    #[serde(default)]
    pub completion_tokens: u32,
    /// Sum of both
    #[serde(default)]
    pub total_tokens: u32,
}

/// Parameters of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    /// Text to quiz on
    pub source_file: PathBuf,
    /// Where the model's reply is written
    pub destination_file: PathBuf,
    /// Generation cap
    pub max_tokens: u32,
    /// Language of the text and of the tutor
    pub language: String,
}

impl QuizRequest {
    /// Request with default token budget and language
    pub fn new(source_file: impl Into<PathBuf>, destination_file: impl Into<PathBuf>) -> Self {
        Self {
            source_file: source_file.into(),
            destination_file: destination_file.into(),
            ..Default::default()
        }
    }

    /// Set the generation cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the tutor language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from(DEFAULT_SOURCE_FILE),
            destination_file: PathBuf::from(DEFAULT_DESTINATION_FILE),
            max_tokens: DEFAULT_MAX_TOKENS,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
