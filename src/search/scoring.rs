//! Relevance scoring
//!
//! Scores are small integers built from four signals: exact id match, exact
//! key match, title prefix, and per-token containment with a bonus that
//! decays with the token's position in the searchable text.

use serde::{Deserialize, Serialize};

use crate::types::Item;

/// Scoring weights. Versioned so rankings can be compared across changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub version: String,
    /// Query equals the entry id
    pub exact_id: u32,
    /// Query equals the composite key, e.g. `lu:springa`
    pub exact_key: u32,
    /// Title starts with the query
    pub title_prefix: u32,
    /// Each query token contained in the searchable text
    pub token_hit: u32,
    /// Positional bonus for a token found at the very start
    pub position_max_bonus: u32,
    /// Characters per point of positional bonus lost
    pub position_step: u32,
}

impl ScoringPolicy {
    pub fn v1() -> Self {
        Self {
            version: "v1".to_string(),
            exact_id: 200,
            exact_key: 200,
            title_prefix: 60,
            token_hit: 15,
            position_max_bonus: 10,
            position_step: 40,
        }
    }

    /// Points for a token found at UTF-16 index `index`
    pub fn token_points(&self, index: usize) -> u32 {
        let step = self.position_step.max(1) as usize;
        let lost = (index / step).min(u32::MAX as usize) as u32;
        self.token_hit + self.position_max_bonus.saturating_sub(lost)
    }

    /// Score an item against a trimmed, lower-cased query.
    ///
    /// `blob` is the item's searchable text. Duplicate tokens each count.
    pub fn score(&self, item: &Item, query: &str, tokens: &[&str], blob: &str) -> u32 {
        let mut score = 0;

        if item.id().to_lowercase() == query {
            score += self.exact_id;
        }
        if item.key().to_lowercase() == query {
            score += self.exact_key;
        }
        if item.title().to_lowercase().starts_with(query) {
            score += self.title_prefix;
        }

        for token in tokens.iter().filter(|t| !t.is_empty()) {
            if let Some(byte_index) = blob.find(token) {
                score += self.token_points(utf16_index(blob, byte_index));
            }
        }

        score
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::v1()
    }
}

/// UTF-16 position of a byte offset that lies on a char boundary. Characters
/// outside the Basic Multilingual Plane count twice.
fn utf16_index(text: &str, byte_index: usize) -> usize {
    text[..byte_index].encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Frame, LexicalUnit};
    use std::sync::Arc;

    fn frame(id: &str, name: &str) -> Item {
        Item::Frame(Arc::new(Frame::new(id, name)))
    }

    #[test]
    fn test_positional_bonus() {
        let policy = ScoringPolicy::v1();
        assert_eq!(policy.token_points(0), 25);
        assert_eq!(policy.token_points(20), 25);
        assert_eq!(policy.token_points(40), 24);
        assert_eq!(policy.token_points(399), 16);
        assert_eq!(policy.token_points(400), 15);
        assert_eq!(policy.token_points(10_000), 15);
    }

    #[test]
    fn test_token_at_index_twenty() {
        // "motion" starts at character 20 and is not the title
        let item = frame("X", "Unrelated");
        let blob = "aaaaaaaaaaaaaaaaaaa motion";
        assert_eq!(blob.find("motion"), Some(20));
        let score = ScoringPolicy::v1().score(&item, "motion", &["motion"], blob);
        assert_eq!(score, 25);
    }

    #[test]
    fn test_exact_id_and_key() {
        let item = frame("motion", "Motion");
        let policy = ScoringPolicy::v1();
        let by_id = policy.score(&item, "motion", &["motion"], "motion motion");
        assert_eq!(by_id, 200 + 60 + 25);

        let by_key = policy.score(&item, "frame:motion", &["frame:motion"], "motion motion");
        assert_eq!(by_key, 200);
    }

    #[test]
    fn test_duplicate_tokens_compound() {
        let item = frame("X", "Y");
        let score = ScoringPolicy::v1().score(&item, "run run", &["run", "run"], "run");
        assert_eq!(score, 50);
    }

    #[test]
    fn test_position_counts_characters_not_bytes() {
        let item = Item::LexicalUnit(Arc::new(LexicalUnit::new("x", "x")));
        // 40 two-byte characters precede the token
        let blob = format!("{}hund", "ö".repeat(40));
        let score = ScoringPolicy::v1().score(&item, "hund", &["hund"], &blob);
        assert_eq!(score, 24);
    }

    #[test]
    fn test_position_counts_astral_characters_twice() {
        let item = Item::LexicalUnit(Arc::new(LexicalUnit::new("x", "x")));
        // 20 emoji occupy 40 UTF-16 units
        let blob = format!("{}hund", "🐕".repeat(20));
        let score = ScoringPolicy::v1().score(&item, "hund", &["hund"], &blob);
        assert_eq!(score, 24);
    }
}
