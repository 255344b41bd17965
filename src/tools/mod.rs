//! MCP tools
//!
//! Ten tools in three groups:
//! - Lookup (6): search, open, exact match, browse, routing, filter options
//! - Annotation (2): span placement and element hues
//! - Admin (2): snapshot reload and statistics

pub mod admin;
pub mod annotate;
mod args;
pub mod lookup;

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::server::McpServer;

pub use admin::{ReloadSnapshotTool, SnapshotStatsTool};
pub use annotate::{AnnotateSentenceTool, ElementHueTool};
pub use lookup::{
    BrowseEntriesTool, ExactLexicalUnitTool, FilterOptionsTool, OpenEntryTool, ResolveRouteTool,
    SearchEntriesTool,
};

/// Register every tool with the server
pub fn register_all_tools<R: BufRead, W: Write>(
    server: &mut McpServer<R, W>,
    dictionary: Arc<Dictionary>,
) {
    // Lookup (6)
    server.register_tool(Box::new(SearchEntriesTool::new(dictionary.clone())));
    server.register_tool(Box::new(OpenEntryTool::new(dictionary.clone())));
    server.register_tool(Box::new(ExactLexicalUnitTool::new(dictionary.clone())));
    server.register_tool(Box::new(BrowseEntriesTool::new(dictionary.clone())));
    server.register_tool(Box::new(ResolveRouteTool::new(dictionary.clone())));
    server.register_tool(Box::new(FilterOptionsTool::new(dictionary.clone())));

    // Annotation (2)
    server.register_tool(Box::new(AnnotateSentenceTool::new(dictionary.clone())));
    server.register_tool(Box::new(ElementHueTool::new()));

    // Admin (2)
    server.register_tool(Box::new(ReloadSnapshotTool::new(dictionary.clone())));
    server.register_tool(Box::new(SnapshotStatsTool::new(dictionary)));
}
