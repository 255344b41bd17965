//! Exact lexical unit tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::tools::args::required_str;

pub struct ExactLexicalUnitTool {
    dictionary: Arc<Dictionary>,
}

impl ExactLexicalUnitTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for ExactLexicalUnitTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "exact_lexical_unit",
            "Find the one lexical unit whose id, Swedish form, lemma, English or German equivalent equals the query. Also reports where submitting the query would lead.",
            json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string"}
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> LexiconResult<Value> {
        let query = required_str(&params, "query")?;
        let snapshot = self.dictionary.snapshot();
        json_response(&json!({
            "lexicalUnit": snapshot.exact_lexical_unit(query),
            "route": snapshot.submit(query).to_fragment(),
        }))
    }
}
