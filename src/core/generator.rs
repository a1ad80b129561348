//! Quiz generation: read the text, ask the model, write the answer

use std::path::Path;
use tracing::{debug, info};

use crate::core::client::{CompletionClient, OpenAiClient};
use crate::core::config::ApiConfig;
use crate::core::errors::{QuizError, Result};
use crate::core::models::QuizRequest;
use crate::core::prompt::build_prompt;

/// Orchestrates one quiz generation against a completion client
#[derive(Debug, Clone)]
pub struct QuizGenerator<C> {
    client: C,
}

impl<C: CompletionClient> QuizGenerator<C> {
    /// Create a generator around an already configured client
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The completion client requests go through
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generate questions for `request.source_file` into `request.destination_file`
    pub async fn generate(&self, request: &QuizRequest) -> Result<()> {
        let prompt = build_prompt(&request.language);

        let source_text = read_source(&request.source_file).await?;
        info!(
            "Read {} bytes from {}",
            source_text.len(),
            request.source_file.display()
        );

        info!(
            "Requesting {} questions (max_tokens={})",
            request.language, request.max_tokens
        );
        let questions = self
            .client
            .complete(&prompt, &source_text, request.max_tokens)
            .await?;
        debug!("Received {} bytes of completion", questions.len());

        write_output(&request.destination_file, &questions).await?;
        info!("Wrote questions to {}", request.destination_file.display());

        Ok(())
    }
}

/// Resolve credentials from the environment, then generate
pub async fn run(request: &QuizRequest) -> Result<()> {
    run_with(|key| std::env::var(key).ok(), OpenAiClient::new, request).await
}

/// Resolve credentials through `lookup`, build a client with `connect`, then generate.
///
/// Credentials are resolved before the source file is touched.
pub async fn run_with<L, M, C>(lookup: L, connect: M, request: &QuizRequest) -> Result<()>
where
    L: Fn(&str) -> Option<String>,
    M: FnOnce(ApiConfig) -> Result<C>,
    C: CompletionClient,
{
    let config = ApiConfig::from_lookup(lookup)?;
    QuizGenerator::new(connect(config)?).generate(request).await
}

async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| QuizError::file(path, e))
}

async fn write_output(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| QuizError::file(path, e))
}
