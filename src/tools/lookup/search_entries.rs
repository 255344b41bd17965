//! Search entries tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::{Dictionary, SearchRequest};
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::tools::args::parse;

/// Relevance search over lexical units, constructions and frames
pub struct SearchEntriesTool {
    dictionary: Arc<Dictionary>,
}

impl SearchEntriesTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for SearchEntriesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "search_entries",
            "Search the dictionary. Results are grouped by kind (lexical units, constructions, frames) and scored by relevance.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Words to look for. An empty query lists every entry with score 0"
                    },
                    "types": {
                        "type": "array",
                        "items": {"type": "string", "enum": ["lu", "construction", "frame"]},
                        "description": "Entry kinds to include (default: all)"
                    },
                    "filters": {
                        "type": "object",
                        "properties": {
                            "pos": {"type": "string", "description": "Part of speech of lexical units"},
                            "frame": {"type": "string", "description": "Frame id the entry belongs to"}
                        }
                    },
                    "sort": {
                        "type": "string",
                        "enum": ["relevance", "az"],
                        "default": "relevance"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum hits per kind (default: 120)"
                    }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> LexiconResult<Value> {
        let request: SearchRequest = parse(params)?;
        let results = self.dictionary.snapshot().search(&request);
        json_response(&results)
    }
}
