//! Exact lexical unit lookup

use std::sync::Arc;

use crate::types::{Item, LexicalUnit};

/// Trim, lower-case and collapse runs of whitespace
pub fn normalize_exact(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn matches_exact(lu: &LexicalUnit, q: &str) -> bool {
    if normalize_exact(&lu.id) == q {
        return true;
    }
    [&lu.display, &lu.lemma, &lu.english, &lu.german]
        .into_iter()
        .map(|field| normalize_exact(field))
        .any(|field| !field.is_empty() && field == q)
}

/// The lexical unit whose id, display form, lemma, English or German
/// equivalent equals the query. Ambiguous or missing matches give `None`.
pub fn exact_lexical_unit(query: &str, items: &[Item]) -> Option<Arc<LexicalUnit>> {
    let q = normalize_exact(query);
    if q.is_empty() {
        return None;
    }

    let mut matches = items
        .iter()
        .filter_map(Item::as_lexical_unit)
        .filter(|lu| matches_exact(lu, &q));

    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(Arc::clone(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: &str, display: &str, english: &str) -> Item {
        let mut lu = LexicalUnit::new(id, display);
        lu.english = english.to_string();
        Item::LexicalUnit(Arc::new(lu))
    }

    #[test]
    fn test_normalize_exact() {
        assert_eq!(normalize_exact("  Springa   Till \t"), "springa till");
    }

    #[test]
    fn test_unique_match() {
        let items = vec![unit("springa.1", "springa", "run"), unit("gå.1", "gå", "walk")];
        let lu = exact_lexical_unit(" RUN ", &items).unwrap();
        assert_eq!(lu.id, "springa.1");
        assert!(exact_lexical_unit("", &items).is_none());
        assert!(exact_lexical_unit("swim", &items).is_none());
    }

    #[test]
    fn test_ambiguous_match_is_none() {
        let items = vec![unit("a", "bank", "bank"), unit("b", "bänk", "bank")];
        assert!(exact_lexical_unit("bank", &items).is_none());
        assert_eq!(exact_lexical_unit("bänk", &items).unwrap().id, "b");
    }
}
