//! CLI argument definitions and handlers

use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

use crate::core::generator;
use crate::core::models::{
    QuizRequest, DEFAULT_DESTINATION_FILE, DEFAULT_LANGUAGE, DEFAULT_MAX_TOKENS,
    DEFAULT_SOURCE_FILE,
};

/// Generate comprehension questions for a foreign-language text
#[derive(Parser, Debug)]
#[command(name = "oui-oui", version, about, long_about = None)]
pub struct Args {
    /// File containing the source text, then where to store the model's response
    #[arg(
        short = 'f',
        long = "files",
        num_args = 2,
        action = ArgAction::Set,
        overrides_with = "files",
        value_names = ["SOURCE", "DEST"],
        default_values = [DEFAULT_SOURCE_FILE, DEFAULT_DESTINATION_FILE]
    )]
    pub files: Vec<PathBuf>,

    /// Maximum number of tokens the model may generate
    #[arg(short = 't', long = "max-tokens", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Language of the text (also accepted as `-lang`)
    #[arg(long = "lang", value_name = "NAME", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse the process arguments, accepting the single-dash `-lang` form
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Invocation parameters for the generator
    pub fn to_request(&self) -> QuizRequest {
        // `-f` always holds exactly two values, defaulted or given
        QuizRequest::new(self.files[0].clone(), self.files[1].clone())
            .with_max_tokens(self.max_tokens)
            .with_language(self.language.clone())
    }
}

/// Rewrite `-lang` and `-lang=NAME` into their `--lang` spelling.
///
/// clap reads a single dash as a cluster of short flags, so `-lang` would
/// otherwise parse as `-l -a -n -g`. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some("-lang") => Some(OsString::from("--lang")),
                Some(s) if s.starts_with("-lang=") => Some(OsString::from(format!("-{}", s))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

/// Handle quiz generation
pub async fn handle_generate(request: QuizRequest) -> anyhow::Result<()> {
    let start_time = Instant::now();

    info!("Source: {}", request.source_file.display());
    info!("Destination: {}", request.destination_file.display());
    info!("Language: {}", request.language);
    info!("Max tokens: {}", request.max_tokens);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.set_message(format!("Generating {} questions...", request.language));
    pb.enable_steady_tick(Duration::from_millis(120));

    let result = generator::run(&request).await;
    pb.finish_and_clear();
    result?;

    let duration = start_time.elapsed();
    info!("Completed in {:?}", duration);

    println!("✅ Questions written to {}", request.destination_file.display());
    println!("   Time: {:?}", duration);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["oui-oui"];
        argv.extend_from_slice(args);
        Args::try_parse_from(normalize_args(argv)).unwrap()
    }

    #[test]
    fn test_default_invocation() {
        let request = parse(&[]).to_request();

        assert_eq!(request, QuizRequest::default());
        assert_eq!(request.source_file, PathBuf::from("article.txt"));
        assert_eq!(request.destination_file, PathBuf::from("questions.txt"));
        assert_eq!(request.max_tokens, 8000);
        assert_eq!(request.language, "French");
    }

    #[test]
    fn test_all_flags() {
        let request =
            parse(&["-f", "in/lemonde.txt", "out/quiz.txt", "-t", "100", "-lang", "Spanish"])
                .to_request();

        assert_eq!(request.source_file, PathBuf::from("in/lemonde.txt"));
        assert_eq!(request.destination_file, PathBuf::from("out/quiz.txt"));
        assert_eq!(request.max_tokens, 100);
        assert_eq!(request.language, "Spanish");
    }

    #[test]
    fn test_lang_spellings() {
        assert_eq!(parse(&["--lang", "German"]).language, "German");
        assert_eq!(parse(&["-lang=Italian"]).language, "Italian");
        assert_eq!(parse(&["--lang=Portuguese"]).language, "Portuguese");
    }

    #[test]
    fn test_last_files_flag_wins() {
        let args = parse(&["-f", "a.txt", "b.txt", "-f", "c.txt", "d.txt"]);

        assert_eq!(args.files, vec![PathBuf::from("c.txt"), PathBuf::from("d.txt")]);
        let request = args.to_request();
        assert_eq!(request.source_file, PathBuf::from("c.txt"));
        assert_eq!(request.destination_file, PathBuf::from("d.txt"));
    }

    #[test]
    fn test_files_requires_two_values() {
        let argv = normalize_args(["oui-oui", "-f", "only-source.txt"]);
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_max_tokens_must_be_integer() {
        assert!(Args::try_parse_from(normalize_args(["oui-oui", "-t", "lots"])).is_err());
        assert!(Args::try_parse_from(normalize_args(["oui-oui", "-t", "-5"])).is_err());
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        let argv = normalize_args(["oui-oui", "-v", "-t", "10", "--", "-lang"]);
        assert_eq!(
            argv,
            vec![
                OsString::from("oui-oui"),
                OsString::from("-v"),
                OsString::from("-t"),
                OsString::from("10"),
                OsString::from("--"),
                OsString::from("-lang"),
            ]
        );
    }
}
