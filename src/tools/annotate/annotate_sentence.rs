//! Annotate sentence tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::dictionary::Dictionary;
use crate::error::LexiconResult;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::tools::args::parse;
use crate::types::SpanTag;

#[derive(Debug, Deserialize)]
struct AnnotateArgs {
    sentence: String,
    #[serde(default)]
    tags: Vec<SpanTag>,
    #[serde(rename = "frameId", default)]
    frame_id: Option<String>,
}

/// Place element spans on a sentence
pub struct AnnotateSentenceTool {
    dictionary: Arc<Dictionary>,
}

impl AnnotateSentenceTool {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl Tool for AnnotateSentenceTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "annotate_sentence",
            "Split a sentence into plain and element-tagged segments. Longer spans win; spans that cannot be placed without overlap are reported as dropped.",
            json!({
                "type": "object",
                "properties": {
                    "sentence": {"type": "string"},
                    "tags": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "elementId": {"type": "string"},
                                "spanText": {"type": "string"}
                            },
                            "required": ["elementId", "spanText"]
                        }
                    },
                    "frameId": {
                        "type": "string",
                        "description": "Frame whose element names label the legend (optional)"
                    }
                },
                "required": ["sentence"]
            }),
        )
    }

    fn execute(&self, params: Value) -> LexiconResult<Value> {
        let args: AnnotateArgs = parse(params)?;
        let annotated = self.dictionary.snapshot().annotate_sentence(
            &args.sentence,
            args.tags,
            args.frame_id.as_deref(),
        );
        json_response(&annotated)
    }
}
