//! Oui-Oui - comprehension quizzes for foreign-language texts
//!
//! This library reads a text, asks a chat model acting as a language tutor for
//! five multiple-choice questions, an answer key and a vocabulary list, and
//! writes the model's reply to a file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::{CompletionClient, OpenAiClient},
    config::ApiConfig,
    errors::QuizError,
    generator::{run, QuizGenerator},
    models::{ChatCompletionRequest, ChatMessage, QuizRequest, Role},
    prompt::build_prompt,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
