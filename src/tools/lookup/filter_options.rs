//! Filter options tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;

pub struct FilterOptionsTool {
    dictionary: Arc<Dictionary>,
}

impl FilterOptionsTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for FilterOptionsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "filter_options",
            "Values accepted by the advanced search filters: parts of speech and frames",
            json!({"type": "object", "properties": {}}),
        )
    }

    fn execute(&self, _params: Value) -> LexiconResult<Value> {
        json_response(&self.dictionary.snapshot().filter_options())
    }
}
