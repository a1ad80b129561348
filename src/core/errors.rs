//! Custom error types for quiz generation

use thiserror::Error;

/// Quiz generation errors
#[derive(Error, Debug)]
pub enum QuizError {
    /// Missing or empty credential / endpoint
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is missing
        message: String,
    },

    /// Source unreadable or destination unwritable
    #[error("File error: {path} - {message}")]
    FileError {
        /// Offending path
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error text
        message: String,
    },

    /// API request failed
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl QuizError {
    /// Shorthand for a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        QuizError::ConfigError {
            message: message.into(),
        }
    }

    /// Wrap an I/O failure on `path`
    pub fn file(path: &std::path::Path, err: std::io::Error) -> Self {
        QuizError::FileError {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_file_error_names_path() {
        let err = QuizError::file(
            Path::new("article.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );

        assert_eq!(
            err.to_string(),
            "File error: article.txt - No such file or directory"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = QuizError::ApiError {
            status: 401,
            message: "invalid api key".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 401 - invalid api key");
    }
}
