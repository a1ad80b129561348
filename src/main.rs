//! Main entry point for the Oui-Oui CLI

#![forbid(unsafe_code)]

use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oui_oui::cli::commands::{handle_generate, Args};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse_normalized();

    // Initialize logging; --verbose wins over RUST_LOG
    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new("oui_oui=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("oui_oui=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    handle_generate(args.to_request()).await
}
