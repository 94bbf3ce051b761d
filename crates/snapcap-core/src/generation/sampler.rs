//! Constrained stochastic sampling over next-token logits.
//!
//! Implements the decoding controls the caption model is driven with:
//! no-repeat n-gram banning, temperature, top-k restriction, and nucleus
//! (top-p) filtering, applied in that order before drawing a token.

use rand::Rng;

use crate::math::softmax;

/// Decoding parameters for one caption draw.
#[derive(Debug, Clone)]
pub struct SamplingParams {
    /// Sampling temperature; flattens (>1) or sharpens (<1) the distribution
    pub temperature: f32,

    /// Nucleus threshold: the candidate pool is the smallest set whose
    /// cumulative probability reaches this value
    pub top_p: f32,

    /// Cap on candidate pool size, applied before nucleus filtering
    pub top_k: usize,

    /// Forbid regenerating any n-gram of this size already present in the
    /// running token sequence
    pub no_repeat_ngram: usize,

    /// Maximum number of new tokens per draw
    pub max_new_tokens: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 0.92,
            top_k: 50,
            no_repeat_ngram: 2,
            max_new_tokens: 50,
        }
    }
}

/// Ban tokens that would complete an n-gram already present in `tokens`.
///
/// For each earlier occurrence of the current (n-1)-token suffix, the token
/// that followed it gets its logit forced to negative infinity.
pub(crate) fn ban_repeated_ngrams(logits: &mut [f32], tokens: &[u32], ngram_size: usize) {
    if ngram_size == 0 || tokens.len() < ngram_size {
        return;
    }

    let prefix_len = ngram_size - 1;
    let current_prefix = &tokens[tokens.len() - prefix_len..];

    for window in tokens.windows(ngram_size) {
        if &window[..prefix_len] == current_prefix {
            let banned = window[prefix_len] as usize;
            if banned < logits.len() {
                logits[banned] = f32::NEG_INFINITY;
            }
        }
    }
}

/// Draw the next token from temperature/top-k/top-p constrained logits.
///
/// Returns `None` only in the degenerate case where every candidate has been
/// banned (all logits are -inf), which callers treat as end of generation.
pub(crate) fn sample_token(
    logits: &[f32],
    params: &SamplingParams,
    rng: &mut impl Rng,
) -> Option<usize> {
    // Temperature, then rank candidates by scaled logit.
    let temperature = if params.temperature > 0.0 {
        params.temperature
    } else {
        1.0
    };

    let mut indexed: Vec<(usize, f32)> = logits
        .iter()
        .map(|&l| l / temperature)
        .enumerate()
        .filter(|(_, l)| l.is_finite())
        .collect();
    if indexed.is_empty() {
        return None;
    }
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    // Top-k: cap the candidate pool before nucleus filtering.
    if params.top_k > 0 && indexed.len() > params.top_k {
        indexed.truncate(params.top_k);
    }

    // Nucleus: keep the smallest prefix whose cumulative probability
    // reaches top_p.
    let kept_logits: Vec<f32> = indexed.iter().map(|&(_, l)| l).collect();
    let probs = softmax(&kept_logits);

    let mut cutoff = probs.len();
    let mut cumulative = 0.0;
    for (i, p) in probs.iter().enumerate() {
        cumulative += p;
        if cumulative >= params.top_p {
            cutoff = i + 1;
            break;
        }
    }

    // Renormalize over the nucleus and draw.
    let total: f32 = probs[..cutoff].iter().sum();
    let mut draw = rng.gen::<f32>() * total;
    for i in 0..cutoff {
        draw -= probs[i];
        if draw <= 0.0 {
            return Some(indexed[i].0);
        }
    }
    Some(indexed[cutoff - 1].0)
}
