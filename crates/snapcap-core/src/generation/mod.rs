//! Style-conditioned caption generation.
//!
//! Two entry points: [`CaptionGenerator`] drives the local caption language
//! model with constrained sampling; [`generate_fallback`] produces captions
//! from fixed templates without any model. Selecting the fallback is an
//! explicit caller decision, never an automatic recovery.

mod decoder;
mod fallback;
mod generator;
mod sampler;
mod styles;

pub use decoder::CaptionLmSession;
pub use fallback::generate_fallback;
pub use generator::CaptionGenerator;
pub use sampler::SamplingParams;
pub use styles::CaptionStyle;
