//! Element hue tool

use serde_json::{json, Value};

use crate::annotate::element_hue;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::tools::args::required_str;

/// Display hue of a frame element. Depends on the id alone.
pub struct ElementHueTool;

impl ElementHueTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ElementHueTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ElementHueTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "element_hue",
            "Hue in [0, 360) used to color a frame element",
            json!({
                "type": "object",
                "properties": {
                    "elementId": {"type": "string"}
                },
                "required": ["elementId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> LexiconResult<Value> {
        let element_id = required_str(&params, "elementId")?;
        json_response(&json!({
            "elementId": element_id,
            "hue": element_hue(element_id),
        }))
    }
}
