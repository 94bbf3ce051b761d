//! Zero-shot image classification against fixed label banks.
//!
//! The analyzer embeds an image once, scores it against four label banks
//! (scene, object, activity, mood) via the CLIP text embeddings encoded at
//! startup, and composes a structured [`crate::types::ImageDescription`].

mod analyzer;
mod banks;
mod text_encoder;

pub use analyzer::ImageAnalyzer;
pub use banks::{LabelBank, SCORE_SCALE};
pub use text_encoder::TextEncoder;
