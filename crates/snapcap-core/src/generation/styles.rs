//! Caption styles and their prompt templates.

use serde::{Deserialize, Serialize};

/// The closed set of caption styles.
///
/// Style resolution is a total function: any unrecognized name maps to
/// [`CaptionStyle::Casual`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionStyle {
    Casual,
    Professional,
    Funny,
    Inspirational,
    Minimalist,
    Poetic,
}

impl CaptionStyle {
    /// All styles, in presentation order.
    pub const ALL: [CaptionStyle; 6] = [
        CaptionStyle::Casual,
        CaptionStyle::Professional,
        CaptionStyle::Funny,
        CaptionStyle::Inspirational,
        CaptionStyle::Minimalist,
        CaptionStyle::Poetic,
    ];

    /// Resolve a style from its name; unknown names fall back to casual.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "casual" => CaptionStyle::Casual,
            "professional" => CaptionStyle::Professional,
            "funny" => CaptionStyle::Funny,
            "inspirational" => CaptionStyle::Inspirational,
            "minimalist" => CaptionStyle::Minimalist,
            "poetic" => CaptionStyle::Poetic,
            _ => CaptionStyle::Casual,
        }
    }

    /// The canonical lowercase name of this style.
    pub fn name(&self) -> &'static str {
        match self {
            CaptionStyle::Casual => "casual",
            CaptionStyle::Professional => "professional",
            CaptionStyle::Funny => "funny",
            CaptionStyle::Inspirational => "inspirational",
            CaptionStyle::Minimalist => "minimalist",
            CaptionStyle::Poetic => "poetic",
        }
    }

    /// The prompt template with one `{image_description}` slot.
    fn template(&self) -> &'static str {
        match self {
            CaptionStyle::Casual => {
                "Write a casual and friendly Instagram caption for {image_description}:"
            }
            CaptionStyle::Professional => {
                "Create a professional and polished Instagram caption for {image_description}:"
            }
            CaptionStyle::Funny => {
                "Generate a humorous and witty Instagram caption for {image_description}:"
            }
            CaptionStyle::Inspirational => {
                "Compose an inspirational and motivational Instagram caption for {image_description}:"
            }
            CaptionStyle::Minimalist => {
                "Create a short, minimal Instagram caption for {image_description}. Keep it under 5 words:"
            }
            CaptionStyle::Poetic => {
                "Write a poetic and artistic Instagram caption for {image_description}:"
            }
        }
    }

    /// Build the generation prompt for a description.
    pub fn prompt(&self, description: &str) -> String {
        self.template().replace("{image_description}", description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_styles() {
        assert_eq!(CaptionStyle::from_name("poetic"), CaptionStyle::Poetic);
        assert_eq!(CaptionStyle::from_name("FUNNY"), CaptionStyle::Funny);
        assert_eq!(
            CaptionStyle::from_name("minimalist"),
            CaptionStyle::Minimalist
        );
    }

    #[test]
    fn test_from_name_unknown_falls_back_to_casual() {
        assert_eq!(CaptionStyle::from_name("dramatic"), CaptionStyle::Casual);
        assert_eq!(CaptionStyle::from_name(""), CaptionStyle::Casual);
    }

    #[test]
    fn test_unknown_style_prompt_matches_casual() {
        let description = "A beach scene showing sunset";
        let unknown = CaptionStyle::from_name("no-such-style").prompt(description);
        let casual = CaptionStyle::Casual.prompt(description);
        assert_eq!(unknown, casual);
    }

    #[test]
    fn test_prompt_substitution() {
        let prompt = CaptionStyle::Poetic.prompt("A forest scene");
        assert_eq!(
            prompt,
            "Write a poetic and artistic Instagram caption for A forest scene:"
        );
        assert!(!prompt.contains("{image_description}"));
    }

    #[test]
    fn test_all_names_roundtrip() {
        for style in CaptionStyle::ALL {
            assert_eq!(CaptionStyle::from_name(style.name()), style);
        }
    }
}
