//! Lookup tools: search, open, browse and routing

mod browse_entries;
mod exact_lexical_unit;
mod filter_options;
mod open_entry;
mod resolve_route;
mod search_entries;

pub use browse_entries::BrowseEntriesTool;
pub use exact_lexical_unit::ExactLexicalUnitTool;
pub use filter_options::FilterOptionsTool;
pub use open_entry::OpenEntryTool;
pub use resolve_route::ResolveRouteTool;
pub use search_entries::SearchEntriesTool;
