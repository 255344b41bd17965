//! Resolve route tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::route::Route;
use crate::server::json_response;
use crate::tools::args::required_str;

pub struct ResolveRouteTool {
    dictionary: Arc<Dictionary>,
}

impl ResolveRouteTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for ResolveRouteTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "resolve_route",
            "Resolve a deep-link fragment such as #lu:springa or #search:g%C3%A5. Links to unknown entries resolve home.",
            json!({
                "type": "object",
                "properties": {
                    "fragment": {"type": "string"}
                },
                "required": ["fragment"]
            }),
        )
    }

    fn execute(&self, params: Value) -> LexiconResult<Value> {
        let fragment = required_str(&params, "fragment")?;
        let route = self.dictionary.snapshot().resolve(&Route::parse(fragment));
        json_response(&json!({
            "route": route,
            "fragment": route.to_fragment(),
        }))
    }
}
