//! Result ordering

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collation::{sort_key, SortKey};
use super::engine::SearchRow;

/// How search results are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Highest score first
    #[default]
    Relevance,
    /// Swedish alphabetical order of titles
    Az,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "relevance" | "score" => Ok(SortMode::Relevance),
            "az" | "a-z" | "alpha" => Ok(SortMode::Az),
            other => Err(format!("unknown sort mode '{}'", other)),
        }
    }
}

/// Sort rows in place. Both modes are stable: equal rows keep their order.
pub fn sort_rows(rows: &mut [SearchRow], mode: SortMode) {
    match mode {
        SortMode::Relevance => rows.sort_by(|a, b| b.score.cmp(&a.score)),
        SortMode::Az => rows.sort_by_cached_key(title_key),
    }
}

fn title_key(row: &SearchRow) -> SortKey {
    sort_key(row.item.title())
}
