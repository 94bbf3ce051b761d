//! Hashtag selection from description keywords.
//!
//! Maps the description to hashtag categories by substring matching, unions
//! the matched pools with a few trending tags, and returns a shuffled,
//! deduplicated, "#"-prefixed selection. Never fails on valid string input.

mod pools;

use rand::seq::SliceRandom;
use rand::Rng;

pub use pools::{CATEGORY_POOLS, KEYWORD_RULES, TRENDING_HASHTAGS};

use pools::pool_for;

/// Number of trending hashtags mixed into the candidate pool.
const TRENDING_SAMPLE: usize = 3;

/// Map a description to its hashtag categories.
///
/// "popular" is always included. If no content category matches, the whole
/// result collapses to `["lifestyle", "popular"]`.
pub(crate) fn match_categories(description: &str) -> Vec<&'static str> {
    let desc_lower = description.to_lowercase();

    let mut categories: Vec<&'static str> = KEYWORD_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| desc_lower.contains(k)))
        .map(|(category, _)| *category)
        .collect();

    categories.push("popular");

    // Just "popular" means no content category matched.
    if categories.len() <= 1 {
        categories = vec!["lifestyle", "popular"];
    }

    categories
}

/// Generate up to `count` hashtags for a description.
///
/// The candidate pool is the union of all matched category pools plus up to
/// three trending tags drawn without replacement; the deduplicated pool is
/// shuffled uniformly and truncated, so the result can be shorter than
/// `count` when the pool is small.
pub fn generate_hashtags(description: &str, count: usize, rng: &mut impl Rng) -> Vec<String> {
    let categories = match_categories(description);
    tracing::debug!("Matched hashtag categories: {:?}", categories);

    let mut candidates: Vec<&str> = Vec::new();
    for category in &categories {
        if let Some(pool) = pool_for(category) {
            candidates.extend_from_slice(pool);
        }
    }

    candidates.extend(
        TRENDING_HASHTAGS
            .choose_multiple(rng, TRENDING_SAMPLE.min(TRENDING_HASHTAGS.len()))
            .copied(),
    );

    // Deduplicate, then shuffle uniformly.
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<&str> = candidates
        .into_iter()
        .filter(|tag| seen.insert(*tag))
        .collect();
    unique.shuffle(rng);

    unique
        .into_iter()
        .take(count)
        .map(|tag| format!("#{tag}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_match_beach_sunset_hits_nature() {
        let categories = match_categories("a beach scene showing sunset");
        assert!(categories.contains(&"nature"));
        assert!(categories.contains(&"popular"));
        assert!(!categories.contains(&"lifestyle"));
    }

    #[test]
    fn test_match_unrecognized_falls_back() {
        let categories = match_categories("xyz abc");
        assert_eq!(categories, vec!["lifestyle", "popular"]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let categories = match_categories("A BEACH Scene");
        assert!(categories.contains(&"nature"));
    }

    #[test]
    fn test_match_substring_not_word_boundary() {
        // "streets" contains the keyword "street".
        let categories = match_categories("wandering the streets");
        assert!(categories.contains(&"urban"));
    }

    #[test]
    fn test_match_multiple_categories() {
        let categories = match_categories("a dog eating food in the city");
        assert!(categories.contains(&"pets"));
        assert!(categories.contains(&"food"));
        assert!(categories.contains(&"urban"));
        assert!(categories.contains(&"popular"));
    }

    #[test]
    fn test_generate_count_and_prefix() {
        let mut r = rng();
        let hashtags = generate_hashtags("a beach scene showing sunset", 5, &mut r);
        assert_eq!(hashtags.len(), 5);
        assert!(hashtags.iter().all(|h| h.starts_with('#')));
    }

    #[test]
    fn test_generate_no_duplicates() {
        let mut r = rng();
        let hashtags = generate_hashtags("a beach scene in the city with food", 40, &mut r);
        let mut sorted = hashtags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), hashtags.len());
    }

    #[test]
    fn test_generate_members_come_from_matched_pools() {
        let mut r = rng();
        let hashtags = generate_hashtags("a beach scene showing sunset", 50, &mut r);

        let mut allowed: Vec<&str> = Vec::new();
        for category in match_categories("a beach scene showing sunset") {
            allowed.extend_from_slice(pools::pool_for(category).unwrap());
        }
        allowed.extend_from_slice(TRENDING_HASHTAGS);

        for hashtag in &hashtags {
            let bare = hashtag.trim_start_matches('#');
            assert!(allowed.contains(&bare), "unexpected hashtag {hashtag}");
        }
    }

    #[test]
    fn test_generate_shorter_when_pool_small() {
        let mut r = rng();
        // Fallback pool: lifestyle (15) + popular (20) + 3 trending, with
        // overlap between the two pools; far fewer than 1000.
        let hashtags = generate_hashtags("xyz abc", 1000, &mut r);
        assert!(hashtags.len() < 1000);
        assert!(!hashtags.is_empty());
    }

    #[test]
    fn test_generate_zero_count() {
        let mut r = rng();
        let hashtags = generate_hashtags("a beach scene", 0, &mut r);
        assert!(hashtags.is_empty());
    }

    #[test]
    fn test_generate_deterministic_with_seed() {
        let h1 = generate_hashtags("a beach scene", 5, &mut rng());
        let h2 = generate_hashtags("a beach scene", 5, &mut rng());
        assert_eq!(h1, h2);
    }
}
