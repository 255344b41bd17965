//! Browse entries tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::{LexiconError, LexiconResult};
use crate::protocol::{McpTool, Tool};
use crate::search::{BROWSE_LETTERS, DEFAULT_BROWSE_LIMIT};
use crate::server::json_response;
use crate::tools::args::{optional_str, optional_usize, required_str};
use crate::types::EntityKind;

pub struct BrowseEntriesTool {
    dictionary: Arc<Dictionary>,
}

impl BrowseEntriesTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for BrowseEntriesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "browse_entries",
            "List entries of one kind whose title starts with a letter, in Swedish alphabetical order",
            json!({
                "type": "object",
                "properties": {
                    "kind": {"type": "string", "enum": ["lu", "construction", "frame"]},
                    "letter": {
                        "type": "string",
                        "description": format!("One of {} or # for anything else", BROWSE_LETTERS.concat())
                    },
                    "limit": {"type": "integer", "default": DEFAULT_BROWSE_LIMIT}
                },
                "required": ["kind"]
            }),
        )
    }

    fn execute(&self, params: Value) -> LexiconResult<Value> {
        let kind: EntityKind = required_str(&params, "kind")?
            .parse()
            .map_err(LexiconError::InvalidArgument)?;
        let letter = optional_str(&params, "letter").unwrap_or("A");
        let limit = optional_usize(&params, "limit").unwrap_or(DEFAULT_BROWSE_LIMIT);

        let page = self.dictionary.snapshot().browse(kind, letter, limit);
        json_response(&page)
    }
}
