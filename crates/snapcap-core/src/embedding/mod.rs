//! CLIP image embedding generation.
//!
//! This module handles converting images into 512-dimensional vector
//! embeddings using a CLIP visual encoder running locally via ONNX Runtime.
//!
//! # Usage
//!
//! ```rust,ignore
//! use snapcap_core::embedding::EmbeddingEngine;
//! use snapcap_core::config::Config;
//!
//! let config = Config::default();
//! let engine = EmbeddingEngine::load(&config.embedding, &config.model_dir())?;
//! let embedding = engine.embed(&decoded_image)?;
//! // embedding is an L2-normalized Vec<f32> with 512 elements
//! ```

pub(crate) mod preprocess;
pub(crate) mod vision;

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::config::EmbeddingConfig;
use crate::error::PipelineError;

use self::preprocess::preprocess;
use self::vision::VisionSession;

/// The visual encoder ONNX model filename.
const VISUAL_MODEL_FILENAME: &str = "visual.onnx";

/// Engine for generating image embeddings via CLIP.
pub struct EmbeddingEngine {
    session: VisionSession,
    image_size: u32,
}

impl EmbeddingEngine {
    /// Load the CLIP visual encoder from the model directory.
    ///
    /// Expects the ONNX model at `{model_dir}/{model_name}/visual.onnx`.
    pub fn load(config: &EmbeddingConfig, model_dir: &Path) -> Result<Self, PipelineError> {
        let model_path = model_dir.join(&config.model).join(VISUAL_MODEL_FILENAME);

        if !model_path.exists() {
            return Err(PipelineError::Model {
                message: format!(
                    "Vision encoder not found at {:?}. Run `snapcap models download` first.",
                    model_path
                ),
            });
        }

        tracing::info!("Loading CLIP vision model from {:?}", model_path);
        let session = VisionSession::load(&model_path)?;
        tracing::info!("CLIP vision model loaded successfully");

        Ok(Self {
            session,
            image_size: config.image_size,
        })
    }

    /// Get the image input size for this model.
    pub fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Generate an embedding vector for an image.
    ///
    /// Returns an L2-normalized Vec<f32> (512 dimensions for ViT-B/32).
    pub fn embed(&self, image: &DynamicImage) -> Result<Vec<f32>, PipelineError> {
        let tensor = preprocess(image, self.image_size);
        self.session.embed(&tensor)
    }

    /// Check whether the model file exists on disk.
    pub fn model_exists(config: &EmbeddingConfig, model_dir: &Path) -> bool {
        Self::model_path(config, model_dir).exists()
    }

    /// Get the expected model file path.
    pub fn model_path(config: &EmbeddingConfig, model_dir: &Path) -> PathBuf {
        model_dir.join(&config.model).join(VISUAL_MODEL_FILENAME)
    }
}
