//! Snapcap CLI - Instagram-style caption and hashtag generation for photos.
//!
//! Snapcap takes a photo as input and outputs a description, a set of
//! style-conditioned captions, and matching hashtags, all generated locally
//! with ONNX models.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a photo with defaults (casual style, 3 captions, 5 hashtags)
//! snapcap analyze photo.jpg
//!
//! # Poetic captions, more hashtags
//! snapcap analyze photo.jpg --style poetic --hashtags 10
//!
//! # View configuration
//! snapcap config show
//!
//! # Manage models
//! snapcap models download
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Snapcap - Instagram-style caption and hashtag generation for photos.
#[derive(Parser, Debug)]
#[command(name = "snapcap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a photo and generate captions and hashtags
    Analyze(cli::analyze::AnalyzeArgs),

    /// Manage AI models (download, list, etc.)
    Models(cli::models::ModelsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match snapcap_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `snapcap config path`."
            );
            snapcap_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Snapcap v{}", snapcap_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Analyze(args) => cli::analyze::execute(args).await,
        Commands::Models(args) => cli::models::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
