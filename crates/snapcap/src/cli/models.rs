//! The `snapcap models` command for managing AI models.

use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use snapcap_core::{Config, Hasher};
use std::path::{Path, PathBuf};

/// Arguments for the `models` command.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

/// Subcommands for model management.
#[derive(Subcommand, Debug)]
pub enum ModelsCommand {
    /// Download required models (CLIP encoders + caption LM + tokenizers)
    Download,

    /// List installed models
    List,

    /// Show model directory path
    Path,
}

/// A downloadable model artifact hosted on Hugging Face.
struct ModelArtifact {
    label: &'static str,
    repo: &'static str,
    remote_path: &'static str,
    /// Subdirectory under the model dir, or "" for the model dir itself.
    local_dir: &'static str,
    local_name: &'static str,
}

/// Everything `snapcap analyze` needs, in download order.
const ARTIFACTS: &[ModelArtifact] = &[
    ModelArtifact {
        label: "CLIP vision encoder",
        repo: "Xenova/clip-vit-base-patch32",
        remote_path: "onnx/vision_model.onnx",
        local_dir: "clip-vit-base-patch32",
        local_name: "visual.onnx",
    },
    ModelArtifact {
        label: "CLIP text encoder",
        repo: "Xenova/clip-vit-base-patch32",
        remote_path: "onnx/text_model.onnx",
        local_dir: "",
        local_name: "text_model.onnx",
    },
    ModelArtifact {
        label: "CLIP tokenizer",
        repo: "Xenova/clip-vit-base-patch32",
        remote_path: "tokenizer.json",
        local_dir: "",
        local_name: "tokenizer.json",
    },
    ModelArtifact {
        label: "Caption model (OPT-350m)",
        repo: "Xenova/opt-350m",
        remote_path: "onnx/decoder_model.onnx",
        local_dir: "opt-350m",
        local_name: "decoder_model.onnx",
    },
    ModelArtifact {
        label: "Caption tokenizer",
        repo: "Xenova/opt-350m",
        remote_path: "tokenizer.json",
        local_dir: "opt-350m",
        local_name: "tokenizer.json",
    },
];

impl ModelArtifact {
    fn local_path(&self, model_dir: &Path) -> PathBuf {
        if self.local_dir.is_empty() {
            model_dir.join(self.local_name)
        } else {
            model_dir.join(self.local_dir).join(self.local_name)
        }
    }

    fn url(&self) -> String {
        format!(
            "https://huggingface.co/{}/resolve/main/{}",
            self.repo, self.remote_path
        )
    }
}

/// Status of each model file on disk.
pub struct InstalledModels {
    pub vision: bool,
    pub text_encoder: bool,
    pub clip_tokenizer: bool,
    pub caption_model: bool,
    pub caption_tokenizer: bool,
}

impl InstalledModels {
    /// Returns true if analysis (without --fallback) can run.
    pub fn can_analyze(&self) -> bool {
        self.vision
            && self.text_encoder
            && self.clip_tokenizer
            && self.caption_model
            && self.caption_tokenizer
    }
}

/// Check which models are currently installed.
pub fn check_installed(config: &Config) -> InstalledModels {
    let model_dir = config.model_dir();
    let exists = |i: usize| ARTIFACTS[i].local_path(&model_dir).exists();

    InstalledModels {
        vision: exists(0),
        text_encoder: exists(1),
        clip_tokenizer: exists(2),
        caption_model: exists(3),
        caption_tokenizer: exists(4),
    }
}

/// Execute the models command.
pub async fn execute(args: ModelsArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let model_dir = config.model_dir();

    match args.command {
        ModelsCommand::Download => {
            let client = reqwest::Client::new();

            for artifact in ARTIFACTS {
                let dest = artifact.local_path(&model_dir);
                if dest.exists() {
                    tracing::info!("{} already exists at {:?}", artifact.label, dest);
                    continue;
                }

                if let Some(parent) = dest.parent() {
                    std::fs::create_dir_all(parent)?;
                }

                let url = artifact.url();
                tracing::info!("Downloading {}...", artifact.label);
                tracing::info!("  Source: {}", url);
                tracing::info!("  Destination: {:?}", dest);

                download_file(&client, &url, &dest).await?;

                let file_size = std::fs::metadata(&dest)?.len();
                tracing::info!(
                    "  {} complete ({:.1} MB)",
                    artifact.label,
                    file_size as f64 / (1024.0 * 1024.0)
                );
            }

            tracing::info!("All downloads complete.");
        }

        ModelsCommand::List => {
            if !model_dir.exists() {
                println!("No models installed.");
                println!("Run `snapcap models download` to download required models.");
                return Ok(());
            }

            println!("Installed models:");
            println!("  Directory: {}\n", model_dir.display());

            for artifact in ARTIFACTS {
                let status = if artifact.local_path(&model_dir).exists() {
                    "ready"
                } else {
                    "not installed"
                };
                println!("  - {:28} {}", artifact.label, status);
            }

            let installed = check_installed(&config);
            if installed.can_analyze() {
                println!("\nReady to analyze.");
            } else {
                println!("\nRun `snapcap models download` to fetch missing files.");
            }
        }

        ModelsCommand::Path => {
            println!("{}", model_dir.display());
        }
    }

    Ok(())
}

/// Download a file from a URL to a local path, streaming to disk.
///
/// Shows a progress bar when the server reports a content length and logs
/// the BLAKE3 hash of the finished file for integrity records.
async fn download_file(client: &reqwest::Client, url: &str, dest: &Path) -> anyhow::Result<()> {
    use futures_util::StreamExt;
    use tokio::io::AsyncWriteExt;

    let response = client
        .get(url)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| anyhow::anyhow!("Download failed: {e}"))?;

    let total_size = response.content_length();
    let progress = match total_size {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::with_template(
                    "  {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})",
                )?
                .progress_chars("=> "),
            );
            Some(pb)
        }
        None => None,
    };

    let mut file = tokio::fs::File::create(dest).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        if let Some(pb) = &progress {
            pb.inc(chunk.len() as u64);
        }
    }

    file.flush().await?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let hash = Hasher::content_hash(dest)
        .map_err(|e| anyhow::anyhow!("Hashing failed for {}: {e}", dest.display()))?;
    tracing::debug!("  BLAKE3: {}", hash);

    Ok(())
}
