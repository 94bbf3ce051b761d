//! Zero-shot image analysis against the fixed label banks.
//!
//! Embeds the image once, scores it against the scene/object/activity/mood
//! banks, selects the top labels per bank, and composes a human-readable
//! description sentence.

use std::path::Path;

use image::DynamicImage;

use crate::config::EmbeddingConfig;
use crate::embedding::EmbeddingEngine;
use crate::error::PipelineError;
use crate::types::{ImageDescription, ScoredLabel};

use super::banks::{
    activity_carrier, mood_carrier, photo_carrier, LabelBank, ACTIVITY_LABELS, MOOD_LABELS,
    OBJECT_LABELS, SCENE_LABELS,
};
use super::text_encoder::TextEncoder;

/// Top-k selection counts per bank.
const TOP_SCENES: usize = 2;
const TOP_OBJECTS: usize = 3;
const TOP_ACTIVITIES: usize = 1;
const TOP_MOODS: usize = 2;

/// Description used when every bank comes back empty.
const EMPTY_DESCRIPTION: &str = "An image";

/// Analyzes images against the four fixed label banks.
///
/// Built once at startup: loading encodes all four banks through the text
/// encoder, after which the text encoder is no longer needed.
pub struct ImageAnalyzer {
    engine: EmbeddingEngine,
    scenes: LabelBank,
    objects: LabelBank,
    activities: LabelBank,
    moods: LabelBank,
}

impl ImageAnalyzer {
    /// Load the vision encoder and encode all label banks.
    pub fn load(config: &EmbeddingConfig, model_dir: &Path) -> Result<Self, PipelineError> {
        let engine = EmbeddingEngine::load(config, model_dir)?;

        let encoder = TextEncoder::new(model_dir)?;
        tracing::info!("Encoding label banks...");
        let scenes = LabelBank::encode(SCENE_LABELS, photo_carrier, &encoder)?;
        let objects = LabelBank::encode(OBJECT_LABELS, photo_carrier, &encoder)?;
        let activities = LabelBank::encode(ACTIVITY_LABELS, activity_carrier, &encoder)?;
        let moods = LabelBank::encode(MOOD_LABELS, mood_carrier, &encoder)?;
        tracing::info!(
            "Label banks ready ({} labels total)",
            scenes.len() + objects.len() + activities.len() + moods.len()
        );

        Ok(Self {
            engine,
            scenes,
            objects,
            activities,
            moods,
        })
    }

    /// Analyze an image and return its structured description.
    ///
    /// The image is embedded once; each bank is scored independently and the
    /// top labels are selected per bank. Scores are similarity magnitudes and
    /// must not be compared across banks.
    pub fn analyze(&self, image: &DynamicImage) -> Result<ImageDescription, PipelineError> {
        let embedding = self.engine.embed(image)?;

        let scenes = top_k(self.scenes.labels(), &self.scenes.scores(&embedding), TOP_SCENES);
        let objects = top_k(
            self.objects.labels(),
            &self.objects.scores(&embedding),
            TOP_OBJECTS,
        );
        let activities = top_k(
            self.activities.labels(),
            &self.activities.scores(&embedding),
            TOP_ACTIVITIES,
        );
        let moods = top_k(self.moods.labels(), &self.moods.scores(&embedding), TOP_MOODS);

        let description = compose_description(&scenes, &objects, &activities, &moods);
        tracing::debug!("Image description: {}", description);

        Ok(ImageDescription {
            description,
            scenes,
            objects,
            activities,
            moods,
        })
    }
}

/// Select the top `k` labels by descending score.
///
/// The sort is stable, so ties resolve to the first-listed label in the
/// bank's definition order.
pub(crate) fn top_k(labels: &[&str], scores: &[f32], k: usize) -> Vec<ScoredLabel> {
    let mut indexed: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
    indexed
        .into_iter()
        .take(k)
        .map(|(i, score)| ScoredLabel::new(labels[i], score))
        .collect()
}

/// Compose a description sentence from the selected labels.
///
/// Non-empty clauses are joined with single spaces in fixed order (scene,
/// objects, activity, mood) and the first letter is capitalized. If every
/// bank came back empty the literal "An image" is returned.
pub(crate) fn compose_description(
    scenes: &[ScoredLabel],
    objects: &[ScoredLabel],
    activities: &[ScoredLabel],
    moods: &[ScoredLabel],
) -> String {
    let scene_part = scenes
        .first()
        .map(|s| format!("a {} scene", s.category))
        .unwrap_or_default();

    let object_part = match objects.len() {
        0 => String::new(),
        1 => format!("showing {}", objects[0].category),
        _ => {
            let names: Vec<&str> = objects.iter().map(|o| o.category.as_str()).collect();
            format!(
                "showing {} and {}",
                names[..names.len() - 1].join(", "),
                names[names.len() - 1]
            )
        }
    };

    let activity_part = activities
        .first()
        .map(|a| format!("with {} activity", a.category))
        .unwrap_or_default();

    let mood_part = moods
        .first()
        .map(|m| format!("in a {} mood", m.category))
        .unwrap_or_default();

    let parts: Vec<&str> = [&scene_part, &object_part, &activity_part, &mood_part]
        .into_iter()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        return EMPTY_DESCRIPTION.to_string();
    }

    capitalize(&parts.join(" "))
}

/// Uppercase the first character of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, score: f32) -> ScoredLabel {
        ScoredLabel::new(name, score)
    }

    #[test]
    fn test_top_k_descending() {
        let labels = ["a", "b", "c", "d"];
        let scores = [1.0, 4.0, 2.0, 3.0];
        let top = top_k(&labels, &scores, 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].category, "b");
        assert_eq!(top[1].category, "d");
        assert_eq!(top[2].category, "c");
        assert!(top[0].score >= top[1].score && top[1].score >= top[2].score);
    }

    #[test]
    fn test_top_k_tie_first_listed_wins() {
        let labels = ["first", "second", "third"];
        let scores = [5.0, 5.0, 5.0];
        let top = top_k(&labels, &scores, 2);

        assert_eq!(top[0].category, "first");
        assert_eq!(top[1].category, "second");
    }

    #[test]
    fn test_top_k_more_than_available() {
        let labels = ["only"];
        let scores = [1.0];
        let top = top_k(&labels, &scores, 3);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_compose_full_description() {
        let description = compose_description(
            &[label("beach", 30.0), label("outdoors", 28.0)],
            &[label("person", 25.0), label("sunset", 24.0), label("drink", 20.0)],
            &[label("relaxing", 22.0)],
            &[label("peaceful", 26.0), label("happy", 21.0)],
        );
        assert_eq!(
            description,
            "A beach scene showing person, sunset and drink with relaxing activity in a peaceful mood"
        );
    }

    #[test]
    fn test_compose_single_object_no_join() {
        let description = compose_description(
            &[],
            &[label("dog", 25.0)],
            &[],
            &[],
        );
        assert_eq!(description, "Showing dog");
    }

    #[test]
    fn test_compose_two_objects() {
        let description = compose_description(&[], &[label("dog", 2.0), label("cat", 1.0)], &[], &[]);
        assert_eq!(description, "Showing dog and cat");
    }

    #[test]
    fn test_compose_all_empty_falls_back() {
        let description = compose_description(&[], &[], &[], &[]);
        assert_eq!(description, "An image");
    }

    #[test]
    fn test_compose_skips_empty_banks() {
        let description = compose_description(
            &[label("city", 30.0)],
            &[],
            &[],
            &[label("energetic", 20.0)],
        );
        assert_eq!(description, "A city scene in a energetic mood");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("a beach scene"), "A beach scene");
        assert_eq!(capitalize(""), "");
    }
}
