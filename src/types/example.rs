//! Example sentences embedded in frames, senses and constructions

use serde::{Deserialize, Serialize};

/// A span tag marks which literal substring of a sentence realizes
/// which frame element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanTag {
    #[serde(rename = "elementId", default)]
    pub element_id: String,
    #[serde(rename = "spanText", default)]
    pub span_text: String,
}

impl SpanTag {
    pub fn new(element_id: impl Into<String>, span_text: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            span_text: span_text.into(),
        }
    }
}

/// Where an example sentence came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

/// Example sentence with translation and span tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub sentence: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub translation: String,
    pub provenance: Provenance,
    #[serde(rename = "spanTags", default)]
    pub span_tags: Vec<SpanTag>,
}

impl Example {
    /// Create an example with a sentence and span tags
    pub fn new(sentence: impl Into<String>, span_tags: Vec<SpanTag>) -> Self {
        Self {
            sentence: sentence.into(),
            span_tags,
            ..Self::default()
        }
    }
}
