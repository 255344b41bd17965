//! Snapshot stats tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;

pub struct SnapshotStatsTool {
    dictionary: Arc<Dictionary>,
}

impl SnapshotStatsTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for SnapshotStatsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "snapshot_stats",
            "Entry counts, generation, load time and load diagnostics of the current data",
            json!({"type": "object", "properties": {}}),
        )
    }

    fn execute(&self, _params: Value) -> LexiconResult<Value> {
        json_response(&self.dictionary.stats())
    }
}
