//! Query evaluation over the flat item list

use rayon::prelude::*;
use serde::Serialize;

use crate::types::Item;

use super::blob::searchable_text;
use super::filters::{AdvancedFilters, EnabledTypes};
use super::scoring::ScoringPolicy;

/// Threshold for scoring candidates in parallel
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

/// A matching item and its relevance score
#[derive(Debug, Clone, Serialize)]
pub struct SearchRow {
    pub item: Item,
    pub score: u32,
}

/// Search with the default scoring policy
pub fn search(
    query: &str,
    enabled: &EnabledTypes,
    filters: &AdvancedFilters,
    items: &[Item],
) -> Vec<SearchRow> {
    search_with_policy(query, enabled, filters, items, &ScoringPolicy::v1())
}

/// Score every candidate of an enabled kind, drop non-matches, then apply
/// the advanced filters. Rows keep the candidates' order.
///
/// A blank query matches every candidate with score 0.
pub fn search_with_policy(
    query: &str,
    enabled: &EnabledTypes,
    filters: &AdvancedFilters,
    items: &[Item],
    policy: &ScoringPolicy,
) -> Vec<SearchRow> {
    let q = query.trim().to_lowercase();
    let candidates: Vec<&Item> = items.iter().filter(|i| enabled.contains(i.kind())).collect();

    if q.is_empty() {
        return candidates
            .into_iter()
            .filter(|item| filters.accepts(item))
            .map(|item| SearchRow {
                item: item.clone(),
                score: 0,
            })
            .collect();
    }

    let tokens: Vec<&str> = q.split_whitespace().collect();
    let score_one = |item: &&Item| -> Option<SearchRow> {
        let blob = searchable_text(item);
        let score = policy.score(item, &q, &tokens, &blob);
        if score == 0 || !filters.accepts(item) {
            return None;
        }
        Some(SearchRow {
            item: (*item).clone(),
            score,
        })
    };

    if candidates.len() > PARALLEL_SEARCH_THRESHOLD {
        candidates.par_iter().filter_map(score_one).collect()
    } else {
        candidates.iter().filter_map(score_one).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityKind, Frame, LexicalUnit};
    use std::sync::Arc;

    fn items() -> Vec<Item> {
        let mut springa = LexicalUnit::new("springa", "springa");
        springa.english = "run".to_string();
        springa.pos = "verb".to_string();
        springa.linked_frames = vec!["Self_motion".to_string()];
        let mut hund = LexicalUnit::new("hund", "hund");
        hund.english = "dog".to_string();
        hund.pos = "noun".to_string();
        vec![
            Item::LexicalUnit(Arc::new(springa)),
            Item::LexicalUnit(Arc::new(hund)),
            Item::Frame(Arc::new(Frame::new("Self_motion", "Self motion"))),
        ]
    }

    fn ids(rows: &[SearchRow]) -> Vec<&str> {
        rows.iter().map(|r| r.item.id()).collect()
    }

    #[test]
    fn test_blank_query_returns_all_candidates() {
        let rows = search("   ", &EnabledTypes::all(), &AdvancedFilters::default(), &items());
        assert_eq!(ids(&rows), vec!["springa", "hund", "Self_motion"]);
        assert!(rows.iter().all(|r| r.score == 0));
    }

    #[test]
    fn test_non_empty_query_scores_positive() {
        let rows = search("RUN", &EnabledTypes::all(), &AdvancedFilters::default(), &items());
        assert_eq!(ids(&rows), vec!["springa"]);
        assert!(rows.iter().all(|r| r.score > 0));
    }

    #[test]
    fn test_exact_id_dominates() {
        let rows = search("self_motion", &EnabledTypes::all(), &AdvancedFilters::default(), &items());
        let frame = rows.iter().find(|r| r.item.kind() == EntityKind::Frame).unwrap();
        let lu = rows.iter().find(|r| r.item.id() == "springa").unwrap();
        assert!(frame.score >= 200);
        assert!(frame.score > lu.score);
    }

    #[test]
    fn test_type_filter() {
        let rows = search("", &EnabledTypes::only(EntityKind::Frame), &AdvancedFilters::default(), &items());
        assert_eq!(ids(&rows), vec!["Self_motion"]);
        assert!(search("hund", &EnabledTypes::none(), &AdvancedFilters::default(), &items()).is_empty());
    }

    #[test]
    fn test_advanced_filters_after_scoring() {
        let rows = search("", &EnabledTypes::all(), &AdvancedFilters::new("noun", ""), &items());
        assert_eq!(ids(&rows), vec!["hund"]);

        let rows = search("", &EnabledTypes::all(), &AdvancedFilters::new("", "Self_motion"), &items());
        assert_eq!(ids(&rows), vec!["springa", "Self_motion"]);
    }

    #[test]
    fn test_parallel_path_preserves_order() {
        let many: Vec<Item> = (0..1500)
            .map(|i| Item::LexicalUnit(Arc::new(LexicalUnit::new(format!("ord{:04}", i), "ord"))))
            .collect();
        let rows = search("ord", &EnabledTypes::all(), &AdvancedFilters::default(), &many);
        assert_eq!(rows.len(), 1500);
        assert_eq!(rows[0].item.id(), "ord0000");
        assert_eq!(rows[1499].item.id(), "ord1499");
    }
}
