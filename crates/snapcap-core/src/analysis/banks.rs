//! Fixed label banks for zero-shot image classification.
//!
//! Each bank is an immutable set of category phrases defined at startup.
//! Phrases are wrapped in a bank-specific carrier sentence before encoding
//! so the text embeddings sit closer to natural photo captions, then stored
//! as a flat row-major matrix for dot-product scoring.

use crate::error::PipelineError;

use super::text_encoder::TextEncoder;

/// Scale factor applied to image/label dot products.
///
/// A fixed design constant controlling score spread, not a probability
/// calibration.
pub const SCORE_SCALE: f32 = 100.0;

/// Scene categories.
pub const SCENE_LABELS: &[&str] = &[
    "indoors",
    "outdoors",
    "beach",
    "mountains",
    "city",
    "forest",
    "desert",
    "snow",
    "restaurant",
    "home",
    "office",
    "street",
];

/// Object categories.
pub const OBJECT_LABELS: &[&str] = &[
    "person",
    "people",
    "group",
    "pet",
    "dog",
    "cat",
    "food",
    "drink",
    "building",
    "landmark",
    "vehicle",
    "sunset",
    "plants",
    "flowers",
    "technology",
    "book",
    "art",
    "fashion",
    "product",
    "sports equipment",
];

/// Activity categories.
pub const ACTIVITY_LABELS: &[&str] = &[
    "eating",
    "drinking",
    "working",
    "exercising",
    "traveling",
    "reading",
    "gaming",
    "shopping",
    "celebrating",
    "relaxing",
    "playing",
    "hiking",
    "swimming",
    "dancing",
    "cooking",
    "meeting",
    "presenting",
    "performing",
];

/// Mood categories.
pub const MOOD_LABELS: &[&str] = &[
    "happy",
    "sad",
    "excited",
    "peaceful",
    "romantic",
    "energetic",
    "professional",
    "casual",
    "serious",
    "playful",
    "elegant",
    "rustic",
];

/// Carrier phrase for scene and object labels.
pub fn photo_carrier(label: &str) -> String {
    format!("a photo of {label}")
}

/// Carrier phrase for activity labels.
pub fn activity_carrier(label: &str) -> String {
    format!("a photo of people {label}")
}

/// Carrier phrase for mood labels.
pub fn mood_carrier(label: &str) -> String {
    format!("a photo with a {label} mood")
}

/// A label bank with pre-computed text embeddings.
///
/// Stores a single flat matrix (N × 512, row-major) so scoring an image is
/// one dot product per label.
pub struct LabelBank {
    labels: &'static [&'static str],
    matrix: Vec<f32>,
    embedding_dim: usize,
}

impl LabelBank {
    /// Encode all labels of a bank through the text encoder.
    ///
    /// Each label is wrapped in `carrier` before encoding; the whole bank is
    /// encoded in one batch since banks are small (12-20 entries).
    pub fn encode(
        labels: &'static [&'static str],
        carrier: fn(&str) -> String,
        encoder: &TextEncoder,
    ) -> Result<Self, PipelineError> {
        let prompts: Vec<String> = labels.iter().map(|&l| carrier(l)).collect();
        let embeddings = encoder.encode_batch(&prompts)?;

        let embedding_dim = embeddings.first().map(|e| e.len()).unwrap_or(512);
        let mut matrix = Vec::with_capacity(labels.len() * embedding_dim);
        for emb in &embeddings {
            matrix.extend_from_slice(emb);
        }

        tracing::debug!(
            "Encoded label bank: {} labels x {} dims",
            labels.len(),
            embedding_dim
        );

        Ok(Self {
            labels,
            matrix,
            embedding_dim,
        })
    }

    /// Create a label bank from a pre-computed matrix (for testing).
    #[cfg(test)]
    pub fn from_raw(labels: &'static [&'static str], matrix: Vec<f32>, embedding_dim: usize) -> Self {
        assert_eq!(
            matrix.len(),
            labels.len() * embedding_dim,
            "Matrix size ({}) does not match {} labels x {} dim",
            matrix.len(),
            labels.len(),
            embedding_dim,
        );
        Self {
            labels,
            matrix,
            embedding_dim,
        }
    }

    /// Score an image embedding against every label in the bank.
    ///
    /// Both the image and label embeddings are L2-normalized, so the dot
    /// product is cosine similarity; the result is scaled by [`SCORE_SCALE`].
    /// Returned scores are in bank order.
    pub fn scores(&self, image_embedding: &[f32]) -> Vec<f32> {
        let dim = self.embedding_dim;
        (0..self.labels.len())
            .map(|i| {
                let row = &self.matrix[i * dim..(i + 1) * dim];
                SCORE_SCALE * crate::math::dot(image_embedding, row)
            })
            .collect()
    }

    /// The labels of this bank, in definition order.
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Number of labels in the bank.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the bank has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_sizes() {
        assert_eq!(SCENE_LABELS.len(), 12);
        assert_eq!(OBJECT_LABELS.len(), 20);
        assert_eq!(ACTIVITY_LABELS.len(), 18);
        assert_eq!(MOOD_LABELS.len(), 12);
    }

    #[test]
    fn test_carrier_phrases() {
        assert_eq!(photo_carrier("beach"), "a photo of beach");
        assert_eq!(activity_carrier("hiking"), "a photo of people hiking");
        assert_eq!(mood_carrier("happy"), "a photo with a happy mood");
    }

    #[test]
    fn test_scores_scaled_dot_product() {
        // Two orthogonal unit label embeddings in a 2-dim space.
        const LABELS: &[&str] = &["first", "second"];
        let bank = LabelBank::from_raw(LABELS, vec![1.0, 0.0, 0.0, 1.0], 2);

        let scores = bank.scores(&[1.0, 0.0]);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - SCORE_SCALE).abs() < 1e-4);
        assert!(scores[1].abs() < 1e-4);
    }

    #[test]
    fn test_scores_preserve_bank_order() {
        const LABELS: &[&str] = &["a", "b", "c"];
        let bank = LabelBank::from_raw(
            LABELS,
            vec![0.0, 1.0, 1.0, 0.0, 0.6, 0.8],
            2,
        );

        let scores = bank.scores(&[0.6, 0.8]);
        // Order matches label definition order, not score order
        assert!((scores[0] - 80.0).abs() < 1e-3);
        assert!((scores[1] - 60.0).abs() < 1e-3);
        assert!((scores[2] - 100.0).abs() < 1e-3);
    }
}
