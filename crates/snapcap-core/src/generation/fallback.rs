//! Template-based caption generation without the language model.
//!
//! An explicit alternate entry point (not a recovery path) producing
//! hand-written captions per style. Template slots are filled by scanning
//! the description's words against small fixed vocabularies, not from the
//! analyzer's structured output.

use super::styles::CaptionStyle;

/// Scene words recognized in the description, with their slot default.
const SCENE_WORDS: &[&str] = &["beach", "mountains", "city", "forest", "sunset", "home", "office"];
const DEFAULT_SCENE: &str = "moment";

/// Object words recognized in the description, with their slot default.
const OBJECT_WORDS: &[&str] = &["people", "food", "nature", "buildings", "sunset", "technology"];
const DEFAULT_OBJECT: &str = "view";

/// Mood words recognized in the description, with their slot default.
const MOOD_WORDS: &[&str] = &["happy", "peaceful", "energetic", "calm", "exciting"];
const DEFAULT_MOOD: &str = "amazing";

/// Suffix appended to captions produced by cycling through the templates
/// a second time.
const REPEAT_SUFFIX: &str = " ✨";

/// The fixed caption templates for a style.
fn templates(style: CaptionStyle) -> &'static [&'static str] {
    match style {
        CaptionStyle::Casual => &[
            "Just another day with {image_objects} ✌️ #goodvibes",
            "Living for moments like these! {image_mood} 💯",
            "This {image_scene} vibe though... 🙌",
        ],
        CaptionStyle::Professional => &[
            "Exploring the intersection of {image_objects} and {image_scene} in today's project.",
            "Showcasing the beauty of {image_objects} in a professional context.",
            "New {image_scene} composition featuring {image_objects}. Thoughts?",
        ],
        CaptionStyle::Funny => &[
            "When the {image_objects} is too good not to share 😂",
            "Plot twist: {image_objects} was the main character all along 🤣",
            "Tell me you love {image_scene} without telling me you love {image_scene}",
        ],
        CaptionStyle::Inspirational => &[
            "Find your {image_mood} even in the midst of chaos. #inspiration",
            "Every {image_scene} has a story to tell. What's yours?",
            "Embrace the journey through every {image_scene} life takes you.",
        ],
        CaptionStyle::Minimalist => &[
            "{image_objects}.",
            "{image_mood} vibes.",
            "Just {image_scene} things.",
        ],
        CaptionStyle::Poetic => &[
            "Whispers of {image_objects} dance through the {image_scene}, painting dreams.",
            "{image_mood} moments captured in time, forever etched in memory.",
            "Between shadows and light, {image_objects} tells its story.",
        ],
    }
}

/// Generate `num_captions` captions from the style's fixed templates.
///
/// The first pass fills each template once; past the template count, the
/// templates cycle again with [`REPEAT_SUFFIX`] appended to mark repeats.
pub fn generate_fallback(
    description: &str,
    style: CaptionStyle,
    num_captions: usize,
) -> Vec<String> {
    let style_templates = templates(style);

    // Pick one word per slot by scanning the raw description words against
    // the slot vocabularies; first match wins.
    let lowered = description.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let scene = pick_word(&words, SCENE_WORDS, DEFAULT_SCENE);
    let objects = pick_word(&words, OBJECT_WORDS, DEFAULT_OBJECT);
    let mood = pick_word(&words, MOOD_WORDS, DEFAULT_MOOD);

    let fill = |template: &str| {
        template
            .replace("{image_scene}", scene)
            .replace("{image_objects}", objects)
            .replace("{image_mood}", mood)
    };

    let mut captions: Vec<String> = style_templates
        .iter()
        .take(num_captions)
        .map(|&t| fill(t))
        .collect();

    while captions.len() < num_captions {
        let template = style_templates[captions.len() % style_templates.len()];
        captions.push(fill(template) + REPEAT_SUFFIX);
    }

    captions
}

/// First description word found in `vocabulary`, or the default.
fn pick_word<'a>(words: &[&'a str], vocabulary: &[&str], default: &'a str) -> &'a str {
    words
        .iter()
        .find(|w| vocabulary.contains(w))
        .copied()
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_slots_from_description() {
        let captions = generate_fallback(
            "A beach scene showing people in a happy mood",
            CaptionStyle::Minimalist,
            3,
        );
        assert_eq!(captions[0], "people.");
        assert_eq!(captions[1], "happy vibes.");
        assert_eq!(captions[2], "Just beach things.");
    }

    #[test]
    fn test_defaults_when_no_words_match() {
        let captions = generate_fallback("xyz abc", CaptionStyle::Minimalist, 3);
        assert_eq!(captions[0], "view.");
        assert_eq!(captions[1], "amazing vibes.");
        assert_eq!(captions[2], "Just moment things.");
    }

    #[test]
    fn test_cycles_with_suffix_past_template_count() {
        let captions = generate_fallback("A beach scene", CaptionStyle::Casual, 5);
        assert_eq!(captions.len(), 5);

        // First three are the primary templates, unsuffixed
        for caption in &captions[..3] {
            assert!(!caption.ends_with(REPEAT_SUFFIX), "unexpected suffix: {caption}");
        }
        // Extras cycle from the first template with the suffix appended
        assert!(captions[3].ends_with(REPEAT_SUFFIX));
        assert!(captions[4].ends_with(REPEAT_SUFFIX));
        assert_eq!(captions[3].trim_end_matches(REPEAT_SUFFIX), captions[0]);
        assert_eq!(captions[4].trim_end_matches(REPEAT_SUFFIX), captions[1]);
    }

    #[test]
    fn test_fewer_captions_than_templates() {
        let captions = generate_fallback("A beach scene", CaptionStyle::Poetic, 1);
        assert_eq!(captions.len(), 1);
    }

    #[test]
    fn test_zero_captions() {
        let captions = generate_fallback("A beach scene", CaptionStyle::Casual, 0);
        assert!(captions.is_empty());
    }

    #[test]
    fn test_all_styles_have_three_templates() {
        for style in CaptionStyle::ALL {
            assert_eq!(templates(style).len(), 3, "style {:?}", style);
        }
    }

    #[test]
    fn test_exact_word_match_only() {
        // "beaches" is not an exact vocabulary word; slot falls back.
        let captions = generate_fallback("beaches everywhere", CaptionStyle::Minimalist, 3);
        assert_eq!(captions[2], "Just moment things.");
    }
}
