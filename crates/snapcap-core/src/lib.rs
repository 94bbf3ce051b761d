//! Snapcap Core - Instagram-style caption and hashtag generation.
//!
//! Snapcap takes a photo and produces a caption set and hashtags: the image
//! is classified zero-shot against fixed label banks with a CLIP embedding
//! model, the top labels are composed into a description sentence, and the
//! description drives a caption language model plus curated hashtag pools.
//!
//! # Architecture
//!
//! ```text
//! Image → Decode → Embed (CLIP) → Label banks → Description
//!                                                   ├→ Captions (LM or templates)
//!                                                   └→ Hashtags
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use snapcap_core::{AnalyzeRequest, CaptionStudio, Config};
//!
//! let config = Config::load()?;
//! let studio = CaptionStudio::load(&config)?;
//!
//! let analysis = studio.run(&image, &AnalyzeRequest::default(), &mut rand::thread_rng())?;
//! println!("{}", analysis.description);
//! ```

// Module declarations
pub mod analysis;
pub mod config;
pub mod decode;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod hash;
pub mod hashtags;
pub mod studio;
pub mod types;

pub(crate) mod math;

// Re-exports for convenient access
pub use analysis::ImageAnalyzer;
pub use config::Config;
pub use decode::{DecodedImage, ImageDecoder};
pub use embedding::EmbeddingEngine;
pub use error::{ConfigError, PipelineError, PipelineResult, Result, SnapcapError};
pub use generation::{generate_fallback, CaptionGenerator, CaptionStyle, SamplingParams};
pub use hash::Hasher;
pub use hashtags::generate_hashtags;
pub use studio::CaptionStudio;
pub use types::{Analysis, AnalyzeRequest, ImageDescription, ScoredLabel};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_request_matches_config_defaults() {
        let config = Config::default();
        let request = AnalyzeRequest::default();
        assert_eq!(request.style, config.generation.default_style);
        assert_eq!(request.num_captions, config.generation.default_captions);
        assert_eq!(request.num_hashtags, config.generation.default_hashtags);
    }
}
