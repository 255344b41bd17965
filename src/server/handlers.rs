//! Helpers shared by the request handlers and the tools

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{LexiconError, LexiconResult};

/// `arguments` of a `tools/call`, or an empty object
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(Value::as_str)
}

/// Tool result with a single text content block
pub fn text_response(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Tool result carrying `value` as pretty-printed JSON text
pub fn json_response<T: Serialize>(value: &T) -> LexiconResult<Value> {
    let text = serde_json::to_string_pretty(value).map_err(LexiconError::Serialization)?;
    Ok(text_response(text))
}
