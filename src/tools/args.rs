//! Argument extraction for tool calls

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LexiconError, LexiconResult};

pub(crate) fn required_str<'a>(params: &'a Value, key: &str) -> LexiconResult<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| LexiconError::InvalidArgument(format!("missing {}", key)))
}

pub(crate) fn optional_str<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub(crate) fn optional_usize(params: &Value, key: &str) -> Option<usize> {
    params.get(key).and_then(Value::as_u64).map(|v| v as usize)
}

/// Deserialize the whole argument object
pub(crate) fn parse<T: DeserializeOwned>(params: Value) -> LexiconResult<T> {
    serde_json::from_value(params).map_err(|e| LexiconError::InvalidArgument(e.to_string()))
}
