//! Style-conditioned caption generation.
//!
//! Builds a prompt from the image description and the requested style, runs
//! independent sampling draws through the caption model, and post-processes
//! each draw into a finished caption.

use std::path::Path;

use rand::Rng;

use crate::config::GenerationConfig;
use crate::error::PipelineError;

use super::decoder::CaptionLmSession;
use super::sampler::SamplingParams;
use super::styles::CaptionStyle;

/// Sentence terminators a finished caption may end with.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Straight and curly quote characters stripped from caption edges.
const QUOTE_CHARS: [char; 6] = ['"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Generates captions from an image description via the caption LM.
pub struct CaptionGenerator {
    lm: CaptionLmSession,
}

impl CaptionGenerator {
    /// Load the caption language model.
    pub fn load(config: &GenerationConfig, model_dir: &Path) -> Result<Self, PipelineError> {
        let lm = CaptionLmSession::load(config, model_dir)?;
        Ok(Self { lm })
    }

    /// Generate `num_captions` captions for a description in the given style.
    ///
    /// Draws are independent — generation state resets between them, and
    /// repeated captions across a batch are possible and not deduplicated.
    /// A model runtime failure aborts the whole request; there is no
    /// automatic switch to the template fallback.
    pub fn generate(
        &self,
        description: &str,
        style: CaptionStyle,
        num_captions: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<String>, PipelineError> {
        let prompt = style.prompt(description);
        let params = SamplingParams::default();

        let mut captions = Vec::with_capacity(num_captions);
        for draw in 0..num_captions {
            let generated = self.lm.generate(&prompt, &params, rng)?;
            let caption = clean_caption(&extract_caption(&generated, &prompt));
            tracing::debug!("Caption draw {}: {:?}", draw + 1, caption);
            captions.push(caption);
        }

        Ok(captions)
    }
}

/// Remove the prompt from decoded model output.
///
/// Normally the decoded text begins with the prompt verbatim and the prefix
/// is stripped; if decoding drifted, any occurrence of the prompt substring
/// is removed instead.
pub(crate) fn extract_caption(generated: &str, prompt: &str) -> String {
    match generated.strip_prefix(prompt) {
        Some(rest) => rest.trim().to_string(),
        None => generated.replace(prompt, "").trim().to_string(),
    }
}

/// Trim a raw caption to its last complete sentence and strip stray quotes.
///
/// A caption that doesn't end in `.`, `!`, or `?` is truncated at the last
/// such terminator, provided one exists past the first character; with no
/// terminator at all it is left untruncated.
pub(crate) fn clean_caption(caption: &str) -> String {
    let mut caption = caption.to_string();

    if !caption.is_empty() && !caption.ends_with(TERMINATORS) {
        if let Some(idx) = caption.rfind(TERMINATORS) {
            if idx > 0 {
                caption.truncate(idx + 1);
            }
        }
    }

    caption.trim_matches(QUOTE_CHARS).to_string()
}
