//! Frame Lexicon
//!
//! A frame-semantic dictionary engine: relevance search over lexical units,
//! frames and constructions, and deterministic span annotation of example
//! sentences. Served over MCP (stdio) or a REST API.
//!
//! # Modules
//!
//! - `types`: Canonical entity records (Frame, LexicalUnit, Construction)
//! - `normalize`: Raw JSON documents to canonical records
//! - `index`: Identity maps, frame relations and the flat item list
//! - `search`: Scoring, filtering, ordering and browsing
//! - `annotate`: Span placement and element hues
//! - `route`: Deep-link fragments
//! - `dictionary`: Dataset loading and the swappable snapshot
//! - `protocol`, `server`, `tools`: MCP over JSON-RPC
//! - `api`: HTTP endpoints
//! - `config`, `logging`, `error`: Ambient setup
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use frame_lexicon::{Config, Dictionary, McpServer, ServerInfo};
//! use frame_lexicon::tools::register_all_tools;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let dictionary = Arc::new(Dictionary::open(&config)?);
//!     let mut server = McpServer::with_info(ServerInfo::new("lexicon", "1.0.0"));
//!     register_all_tools(&mut server, dictionary);
//!     server.run()?;
//!     Ok(())
//! }
//! ```

pub mod annotate;
pub mod api;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod logging;
pub mod normalize;
pub mod protocol;
pub mod route;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;

// Re-export commonly used items at crate root
pub use annotate::{annotate, element_hue, AnnotatedExample, Segment};
pub use config::Config;
pub use dictionary::{Dictionary, EntryView, SearchRequest, SearchResults, Snapshot, SnapshotStats};
pub use error::{LexiconError, LexiconResult};
pub use index::{build_indexes, Indexes};
pub use normalize::{normalize, Dataset, RawDataset, RawDocument};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use route::Route;
pub use search::{search, sort_rows, AdvancedFilters, EnabledTypes, SearchRow, SortMode};
pub use server::McpServer;
pub use types::{Construction, Entity, EntityKind, Frame, Item, LexicalUnit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
