//! The `snapcap analyze` command for analyzing a photo.

use clap::Args;
use snapcap_core::{AnalyzeRequest, CaptionStudio, Config, ImageDecoder};
use std::path::PathBuf;

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image file to analyze
    #[arg(required = true)]
    pub input: PathBuf,

    /// Caption style (casual, professional, funny, inspirational,
    /// minimalist, poetic); unrecognized values fall back to casual
    #[arg(short, long, default_value = "casual")]
    pub style: String,

    /// Number of captions to generate
    #[arg(short, long, default_value = "3")]
    pub captions: usize,

    /// Number of hashtags to generate
    #[arg(long, default_value = "5")]
    pub hashtags: usize,

    /// Use the template fallback generator instead of the caption model
    #[arg(long)]
    pub fallback: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = Config::load()?;

    let decoder = ImageDecoder::new(config.limits.clone());
    let decoded = decoder.decode(&args.input).await?;
    tracing::info!(
        "Decoded {} ({}x{}, {:?})",
        args.input.display(),
        decoded.width,
        decoded.height,
        decoded.format
    );

    let request = AnalyzeRequest {
        style: args.style,
        num_captions: args.captions,
        num_hashtags: args.hashtags,
        fallback: args.fallback,
    };

    // Model loading and inference are compute-bound; keep them off the
    // async runtime's worker thread.
    let use_fallback = args.fallback;
    let analysis = tokio::task::spawn_blocking(move || {
        let studio = if use_fallback {
            CaptionStudio::load_without_generator(&config)?
        } else {
            CaptionStudio::load(&config)?
        };
        studio.run(&decoded.image, &request, &mut rand::thread_rng())
    })
    .await??;

    let json = if args.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))?;
            tracing::info!("Wrote analysis to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
