//! Core data types for the Snapcap caption generation pipeline.
//!
//! These types represent the output of analyzing an image and generating
//! captions and hashtags for it.

use serde::{Deserialize, Serialize};

/// A label from one of the classification banks with its similarity score.
///
/// Scores are similarity magnitudes, not probabilities. Higher is more
/// relevant. Scores are not normalized across banks, so comparing a scene
/// score against an object score is meaningless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLabel {
    /// The label text (e.g., "beach", "sunset", "happy")
    pub category: String,

    /// Similarity score (scaled dot product against the image embedding)
    pub score: f32,
}

impl ScoredLabel {
    /// Create a new scored label.
    pub fn new(category: impl Into<String>, score: f32) -> Self {
        Self {
            category: category.into(),
            score,
        }
    }
}

/// Structured description of an image produced by the analyzer.
///
/// Built once per request and consumed read-only by the caption generator
/// and hashtag selector. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescription {
    /// Human-readable sentence composed from the top labels
    pub description: String,

    /// Top-2 scene labels, sorted by descending score
    pub scenes: Vec<ScoredLabel>,

    /// Top-3 object labels, sorted by descending score
    pub objects: Vec<ScoredLabel>,

    /// Top-1 activity label
    pub activities: Vec<ScoredLabel>,

    /// Top-2 mood labels, sorted by descending score
    pub moods: Vec<ScoredLabel>,
}

/// Parameters for a single analysis request.
///
/// Defaults mirror what the serving layer would fill in for an empty form:
/// casual style, 3 captions, 5 hashtags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    /// Caption style name; unrecognized values fall back to "casual"
    pub style: String,

    /// Number of captions to generate
    pub num_captions: usize,

    /// Number of hashtags to generate
    pub num_hashtags: usize,

    /// Use the template fallback generator instead of the language model
    pub fallback: bool,
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self {
            style: "casual".to_string(),
            num_captions: 3,
            num_hashtags: 5,
            fallback: false,
        }
    }
}

/// The complete output for one analyzed image.
///
/// This is the response-boundary type: the serialization collaborator takes
/// it from here (base64 image packaging is that collaborator's job, not ours).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Human-readable description sentence
    pub description: String,

    /// Generated captions, in draw order
    pub captions: Vec<String>,

    /// Generated hashtags, each "#"-prefixed
    pub hashtags: Vec<String>,

    /// Echoed style value, exactly as requested
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_defaults() {
        let req = AnalyzeRequest::default();
        assert_eq!(req.style, "casual");
        assert_eq!(req.num_captions, 3);
        assert_eq!(req.num_hashtags, 5);
        assert!(!req.fallback);
    }

    #[test]
    fn test_analyze_request_partial_json() {
        // Missing fields fall back to defaults, like an HTTP form with
        // only some fields present.
        let req: AnalyzeRequest = serde_json::from_str(r#"{"style":"poetic"}"#).unwrap();
        assert_eq!(req.style, "poetic");
        assert_eq!(req.num_captions, 3);
        assert_eq!(req.num_hashtags, 5);
    }

    #[test]
    fn test_analysis_roundtrip() {
        let analysis = Analysis {
            description: "A beach scene showing sunset".to_string(),
            captions: vec!["Golden hour.".to_string()],
            hashtags: vec!["#beach".to_string(), "#sunset".to_string()],
            style: "casual".to_string(),
        };
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"description\":\"A beach scene showing sunset\""));

        let parsed: Analysis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.captions.len(), 1);
        assert_eq!(parsed.hashtags[0], "#beach");
        assert_eq!(parsed.style, "casual");
    }

    #[test]
    fn test_scored_label_serde() {
        let label = ScoredLabel::new("beach", 27.4);
        let json = serde_json::to_string(&label).unwrap();
        let parsed: ScoredLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, "beach");
        assert!((parsed.score - 27.4).abs() < 1e-6);
    }
}
