//! Causal language model session for caption generation.
//!
//! Loads an OPT-style decoder exported to ONNX plus its tokenizer and runs
//! autoregressive generation with constrained sampling. Each draw recomputes
//! the full sequence (no KV cache) — caption prompts are short, so the
//! simplicity wins over incremental decoding.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Value;
use rand::Rng;

use crate::config::GenerationConfig;
use crate::error::PipelineError;

use super::sampler::{ban_repeated_ngrams, sample_token, SamplingParams};

/// The decoder ONNX model filename.
const DECODER_MODEL_FILENAME: &str = "decoder_model.onnx";

/// The caption LM tokenizer filename.
const TOKENIZER_FILENAME: &str = "tokenizer.json";

/// Wraps an ONNX Runtime session for the caption language model.
///
/// Uses the same `Mutex<Session>` pattern as the embedding sessions; one
/// draw holds the lock for its whole autoregressive loop, so concurrent
/// callers serialize at the model as required by the backend.
pub struct CaptionLmSession {
    session: Mutex<Session>,
    tokenizer: tokenizers::Tokenizer,
    eos_token_id: u32,
}

impl CaptionLmSession {
    /// Load the decoder and tokenizer from `{model_dir}/{model_name}/`.
    pub fn load(config: &GenerationConfig, model_dir: &Path) -> Result<Self, PipelineError> {
        let dir = model_dir.join(&config.model);
        let decoder_path = dir.join(DECODER_MODEL_FILENAME);
        let tokenizer_path = dir.join(TOKENIZER_FILENAME);

        if !decoder_path.exists() {
            return Err(PipelineError::Model {
                message: format!(
                    "Caption model not found at {:?}. Run `snapcap models download` first.",
                    decoder_path
                ),
            });
        }

        tracing::info!("Loading caption model from {:?}", decoder_path);
        let session = Session::builder()
            .map_err(|e| PipelineError::Model {
                message: format!("Failed to create ONNX session builder: {e}"),
            })?
            .commit_from_file(&decoder_path)
            .map_err(|e| PipelineError::Model {
                message: format!("Failed to load caption model: {e}"),
            })?;

        let tokenizer = tokenizers::Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            PipelineError::Model {
                message: format!("Failed to load caption tokenizer: {e}"),
            }
        })?;

        // OPT uses </s> as both BOS and EOS; id 2 in the released exports.
        let eos_token_id = tokenizer.token_to_id("</s>").unwrap_or(2);
        tracing::debug!("Caption model loaded (eos_token_id={})", eos_token_id);

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            eos_token_id,
        })
    }

    /// Run one independent generation draw conditioned on `prompt`.
    ///
    /// Samples up to `params.max_new_tokens` continuation tokens, stopping
    /// early on EOS, then decodes the full sequence (prompt included) with
    /// special tokens stripped. Prompt removal is the caller's concern.
    pub fn generate(
        &self,
        prompt: &str,
        params: &SamplingParams,
        rng: &mut impl Rng,
    ) -> Result<String, PipelineError> {
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| PipelineError::Generation {
                message: format!("Prompt tokenization failed: {e}"),
            })?;
        let mut tokens: Vec<u32> = encoding.get_ids().to_vec();

        let mut session = self.session.lock().map_err(|e| PipelineError::Generation {
            message: format!("Caption model lock poisoned: {e}"),
        })?;

        for _ in 0..params.max_new_tokens {
            let seq_len = tokens.len();
            let input_ids: Vec<i64> = tokens.iter().map(|&t| t as i64).collect();
            let attention_mask = vec![1i64; seq_len];

            let shape = vec![1i64, seq_len as i64];
            let input_ids_value =
                Value::from_array((shape.clone(), input_ids)).map_err(|e| {
                    PipelineError::Generation {
                        message: format!("Failed to create input_ids tensor: {e}"),
                    }
                })?;
            let attention_mask_value =
                Value::from_array((shape, attention_mask)).map_err(|e| {
                    PipelineError::Generation {
                        message: format!("Failed to create attention_mask tensor: {e}"),
                    }
                })?;

            let outputs = session
                .run(ort::inputs![
                    "input_ids" => input_ids_value,
                    "attention_mask" => attention_mask_value,
                ])
                .map_err(|e| PipelineError::Generation {
                    message: format!("Caption model inference failed: {e}"),
                })?;

            let logits_output = outputs
                .iter()
                .find(|(name, _)| *name == "logits")
                .ok_or_else(|| PipelineError::Generation {
                    message: "Caption model did not produce logits".to_string(),
                })?;

            let (logits_shape, logits_data) = logits_output
                .1
                .try_extract_tensor::<f32>()
                .map_err(|e| PipelineError::Generation {
                    message: format!("Failed to extract logits tensor: {e}"),
                })?;

            // logits is [1, seq_len, vocab_size]; take the last position.
            if logits_shape.len() != 3 {
                return Err(PipelineError::Generation {
                    message: format!("Unexpected logits shape: {:?}", logits_shape),
                });
            }
            let vocab_size = logits_shape[2] as usize;
            let offset = (seq_len - 1) * vocab_size;
            let mut last_logits = logits_data[offset..offset + vocab_size].to_vec();

            ban_repeated_ngrams(&mut last_logits, &tokens, params.no_repeat_ngram);

            let next_token = match sample_token(&last_logits, params, rng) {
                Some(token) => token as u32,
                None => break,
            };

            if next_token == self.eos_token_id {
                break;
            }
            tokens.push(next_token);
        }

        self.tokenizer
            .decode(&tokens, true)
            .map_err(|e| PipelineError::Generation {
                message: format!("Failed to decode generated tokens: {e}"),
            })
    }

    /// Check whether the caption model files exist on disk.
    pub fn model_exists(config: &GenerationConfig, model_dir: &Path) -> bool {
        let dir = model_dir.join(&config.model);
        dir.join(DECODER_MODEL_FILENAME).exists() && dir.join(TOKENIZER_FILENAME).exists()
    }

    /// Get the expected decoder model path.
    pub fn model_path(config: &GenerationConfig, model_dir: &Path) -> PathBuf {
        model_dir.join(&config.model).join(DECODER_MODEL_FILENAME)
    }
}
