//! Multi-entity search
//!
//! Substring relevance search over the flat item list of a snapshot:
//! - Type filtering, token scoring and advanced filters (`engine`)
//! - Versioned scoring weights (`scoring`)
//! - Stable relevance and Swedish alphabetical ordering (`sort`, `collation`)
//! - Exact lexical unit lookup and A–Z browsing

mod blob;
mod browse;
pub mod collation;
mod engine;
mod exact;
mod filters;
mod scoring;
mod sort;

pub use blob::searchable_text;
pub use browse::{
    browse, first_letter, BrowseEntry, BrowsePage, BROWSE_LETTERS, DEFAULT_BROWSE_LIMIT,
    OTHER_BUCKET,
};
pub use engine::{search, search_with_policy, SearchRow};
pub use exact::{exact_lexical_unit, normalize_exact};
pub use filters::{AdvancedFilters, EnabledTypes};
pub use scoring::ScoringPolicy;
pub use sort::{sort_rows, SortMode};
