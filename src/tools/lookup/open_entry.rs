//! Open entry tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::tools::args::required_str;

/// Full view of one entry with its related entries and annotated examples
pub struct OpenEntryTool {
    dictionary: Arc<Dictionary>,
}

impl OpenEntryTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for OpenEntryTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "open_entry",
            "Open a dictionary entry by key (lu:<id>, frame:<id> or construction:<id>)",
            json!({
                "type": "object",
                "properties": {
                    "key": {
                        "type": "string",
                        "description": "Entry key, e.g. frame:Self_motion"
                    }
                },
                "required": ["key"]
            }),
        )
    }

    fn execute(&self, params: Value) -> LexiconResult<Value> {
        let key = required_str(&params, "key")?;
        let view = self.dictionary.snapshot().entry(key)?;
        json_response(&view)
    }
}
