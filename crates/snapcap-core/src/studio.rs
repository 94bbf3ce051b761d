//! The caption studio: one-time model loading and per-request assembly.
//!
//! A [`CaptionStudio`] is constructed once at process startup and held as
//! shared read-only state for the process lifetime; request handlers borrow
//! it rather than recreating models per request.

use image::DynamicImage;
use rand::Rng;

use crate::analysis::ImageAnalyzer;
use crate::config::Config;
use crate::error::PipelineError;
use crate::generation::{generate_fallback, CaptionGenerator, CaptionStyle};
use crate::hashtags::generate_hashtags;
use crate::types::{Analysis, AnalyzeRequest, ImageDescription};

/// Owns the loaded models and drives the full analysis pipeline.
pub struct CaptionStudio {
    analyzer: ImageAnalyzer,
    generator: Option<CaptionGenerator>,
}

impl CaptionStudio {
    /// Load the vision/text encoders, encode the label banks, and load the
    /// caption language model.
    pub fn load(config: &Config) -> Result<Self, PipelineError> {
        let model_dir = config.model_dir();
        let analyzer = ImageAnalyzer::load(&config.embedding, &model_dir)?;
        let generator = CaptionGenerator::load(&config.generation, &model_dir)?;
        Ok(Self {
            analyzer,
            generator: Some(generator),
        })
    }

    /// Load only the analyzer, leaving caption generation to the template
    /// fallback. Used when the caption model isn't installed.
    pub fn load_without_generator(config: &Config) -> Result<Self, PipelineError> {
        let model_dir = config.model_dir();
        let analyzer = ImageAnalyzer::load(&config.embedding, &model_dir)?;
        Ok(Self {
            analyzer,
            generator: None,
        })
    }

    /// Whether the caption language model is loaded.
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Analyze an image without generating captions or hashtags.
    pub fn analyze(&self, image: &DynamicImage) -> Result<ImageDescription, PipelineError> {
        self.analyzer.analyze(image)
    }

    /// Run the full pipeline for one request.
    ///
    /// The analyzer produces the description once; the caption generator and
    /// hashtag selector each consume it independently. A request either
    /// succeeds with all fields populated (per their fallback rules) or
    /// fails entirely.
    pub fn run(
        &self,
        image: &DynamicImage,
        request: &AnalyzeRequest,
        rng: &mut impl Rng,
    ) -> Result<Analysis, PipelineError> {
        let style = CaptionStyle::from_name(&request.style);
        let description = self.analyzer.analyze(image)?;

        let captions = match (&self.generator, request.fallback) {
            (Some(generator), false) => generator.generate(
                &description.description,
                style,
                request.num_captions,
                rng,
            )?,
            _ => generate_fallback(&description.description, style, request.num_captions),
        };

        let hashtags = generate_hashtags(&description.description, request.num_hashtags, rng);

        Ok(Analysis {
            description: description.description,
            captions,
            hashtags,
            style: request.style.clone(),
        })
    }
}
