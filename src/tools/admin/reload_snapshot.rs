//! Reload snapshot tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;

pub struct ReloadSnapshotTool {
    dictionary: Arc<Dictionary>,
}

impl ReloadSnapshotTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for ReloadSnapshotTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "reload_snapshot",
            "Re-read the dataset from disk and swap it in. On failure the current data keeps serving.",
            json!({"type": "object", "properties": {}}),
        )
    }

    fn execute(&self, _params: Value) -> LexiconResult<Value> {
        let snapshot = self.dictionary.reload()?;
        json_response(&snapshot.stats())
    }
}
