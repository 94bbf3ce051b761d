//! Static hashtag pools, keyword rules, and the trending list.
//!
//! The pools are a fixed lookup resource defined at startup. Duplicate tags
//! across (or within) categories are allowed; the selector deduplicates.

/// Hashtag pools keyed by category name.
pub const CATEGORY_POOLS: &[(&str, &[&str])] = &[
    (
        "nature",
        &[
            "nature", "naturelovers", "naturephotography", "outdoors", "landscape",
            "mountains", "beach", "ocean", "sunset", "sunrise", "sky", "clouds",
            "forest", "hiking", "wildlife", "wilderness", "earthpix", "naturegram",
        ],
    ),
    (
        "urban",
        &[
            "city", "cityscape", "architecture", "urban", "street", "building",
            "skyscraper", "downtown", "citylife", "cityview", "citylights",
            "streetphotography", "urbanphotography", "explore", "travel",
        ],
    ),
    (
        "food",
        &[
            "food", "foodporn", "foodie", "instafood", "foodphotography", "yummy",
            "delicious", "homemade", "breakfast", "lunch", "dinner", "dessert",
            "cooking", "baking", "healthyfood", "foodblogger", "foodlover", "foodgram",
        ],
    ),
    (
        "portrait",
        &[
            "portrait", "portraitphotography", "selfie", "model", "fashion",
            "beauty", "makeup", "style", "outfit", "ootd", "fashionblogger",
            "portraitmood", "portraiture", "face", "smile", "eyes",
        ],
    ),
    (
        "lifestyle",
        &[
            "lifestyle", "life", "happy", "love", "instagood", "beautiful",
            "photooftheday", "inspiration", "motivation", "positivevibes",
            "goodvibes", "mindfulness", "selflove", "gratitude", "blessed",
        ],
    ),
    (
        "travel",
        &[
            "travel", "travelgram", "wanderlust", "adventure", "explore",
            "traveling", "holiday", "vacation", "tourism", "travelphotography",
            "instatravel", "trip", "journey", "travelblogger", "destination",
            "globetrotter", "traveltheworld",
        ],
    ),
    (
        "fitness",
        &[
            "fitness", "gym", "workout", "fit", "training", "exercise", "health",
            "healthy", "bodybuilding", "fitnessmotivation", "sport", "running",
            "yoga", "strength", "fitlife", "fitnessjourney", "gains",
        ],
    ),
    (
        "pets",
        &[
            "pet", "dog", "cat", "puppy", "kitten", "dogsofinstagram", "catsofinstagram",
            "animals", "petsofinstagram", "dogstagram", "catstagram", "instadog",
            "instacat", "petstagram", "cuteanimals", "adoptdontshop",
        ],
    ),
    (
        "creative",
        &[
            "art", "artist", "artwork", "design", "drawing", "painting", "sketch",
            "illustration", "creative", "creativity", "artistsoninstagram",
            "instaart", "digitalart", "handmade", "artistic", "contemporaryart",
        ],
    ),
    (
        "technology",
        &[
            "technology", "tech", "gadgets", "innovation", "programming", "coding",
            "developer", "computer", "smartphone", "software", "hardware",
            "electronics", "science", "engineering", "future", "digital",
        ],
    ),
    (
        "events",
        &[
            "party", "celebration", "wedding", "birthday", "concert", "festival",
            "event", "music", "dance", "nightlife", "fun", "friends", "ceremony",
            "reception", "celebration", "congrats", "cheers",
        ],
    ),
    (
        "business",
        &[
            "business", "entrepreneur", "startup", "success", "motivation",
            "leadership", "marketing", "smallbusiness", "entrepreneurship",
            "businessowner", "hustle", "work", "career", "goals", "boss",
        ],
    ),
    (
        "popular",
        &[
            "instagood", "photooftheday", "beautiful", "photography", "instagram",
            "picoftheday", "follow", "followme", "like4like", "instadaily",
            "bestoftheday", "amazing", "instalike", "igers", "likeforlike",
            "20likes", "nofilter", "style", "swag", "instamood",
        ],
    ),
];

/// Ordered keyword rules mapping description substrings to categories.
///
/// Evaluated deterministically in this order; a category matches when any of
/// its keywords appears as a substring of the lowercased description.
pub const KEYWORD_RULES: &[(&str, &[&str])] = &[
    (
        "nature",
        &[
            "nature", "outdoor", "landscape", "mountain", "beach", "ocean", "sunset", "sunrise",
            "sky", "cloud", "forest", "hiking", "wildlife", "wilderness", "tree", "flower", "plant",
        ],
    ),
    (
        "urban",
        &["city", "urban", "street", "building", "skyscraper", "downtown", "architecture"],
    ),
    (
        "food",
        &[
            "food", "eat", "drink", "meal", "breakfast", "lunch", "dinner", "dessert",
            "restaurant", "cafe",
        ],
    ),
    (
        "portrait",
        &["person", "people", "portrait", "selfie", "face", "smile", "model", "fashion"],
    ),
    (
        "lifestyle",
        &["lifestyle", "home", "living", "happy", "relax", "mindful", "positive"],
    ),
    (
        "travel",
        &[
            "travel", "adventure", "explore", "journey", "destination", "vacation", "holiday",
            "tourism",
        ],
    ),
    (
        "fitness",
        &["fitness", "gym", "workout", "exercise", "training", "sport", "run", "yoga"],
    ),
    ("pets", &["pet", "dog", "cat", "animal"]),
    (
        "creative",
        &["art", "creative", "design", "drawing", "painting", "artistic"],
    ),
    (
        "technology",
        &["technology", "tech", "gadget", "device", "computer", "phone", "digital"],
    ),
    (
        "events",
        &["party", "celebration", "wedding", "birthday", "concert", "festival", "event"],
    ),
    (
        "business",
        &["business", "work", "professional", "office", "meeting", "presentation"],
    ),
];

/// Trending and seasonal hashtags mixed into every candidate pool.
pub const TRENDING_HASHTAGS: &[&str] = &[
    "trending", "viral", "challenge", "mondaymotivation", "tuesdayvibe", "wednesdaywisdom",
    "throwbackthursday", "tbt", "flashbackfriday", "weekendvibes", "sundayfunday",
];

/// Look up the hashtag pool for a category name.
pub fn pool_for(category: &str) -> Option<&'static [&'static str]> {
    CATEGORY_POOLS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, pool)| *pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_category_has_a_pool() {
        for (category, _) in KEYWORD_RULES {
            assert!(pool_for(category).is_some(), "missing pool for {category}");
        }
    }

    #[test]
    fn test_popular_pool_exists() {
        assert!(pool_for("popular").is_some());
    }

    #[test]
    fn test_unknown_category_has_no_pool() {
        assert!(pool_for("astrology").is_none());
    }

    #[test]
    fn test_twelve_content_rules() {
        assert_eq!(KEYWORD_RULES.len(), 12);
        // "popular" is appended by the selector, never matched by keyword.
        assert!(KEYWORD_RULES.iter().all(|(c, _)| *c != "popular"));
    }
}
