//! Raw document shapes as they appear on disk
//!
//! Every field is optional. Text fields accept strings, numbers and booleans;
//! list fields accept `null`, a single value or an array.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a scalar into text; `null`, arrays and objects become `None`
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

/// Deserialize `null`, a single item or an array into a vector
pub(crate) fn loose_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    })
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Object keys tried, in order, when a list entry is an object
const TEXT_KEYS: &[&str] = &["pattern_sv", "pattern", "text", "word_sv", "word", "meaning_en"];

/// Best-effort text for a loosely typed list entry
pub(crate) fn textify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => TEXT_KEYS
            .iter()
            .filter_map(|k| map.get(*k))
            .filter_map(scalar_text)
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| value.to_string()),
        Value::Array(_) => value.to_string(),
    }
}

/// Text of a list of loose values, dropping empty entries
pub(crate) fn textify_all(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(textify)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract a referenced id from `"id"` or `{ <key>: "id" }`
pub(crate) fn reference_id(value: &Value, keys: &[&str]) -> Option<String> {
    let id = match value {
        Value::Object(map) => keys
            .iter()
            .filter_map(|k| map.get(*k))
            .filter_map(scalar_text)
            .find(|s| !s.is_empty()),
        other => scalar_text(other),
    }?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Non-empty text or `None`, for `||`-style fallbacks
pub(crate) fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.is_empty())
}

/// JavaScript-style truthiness for flags stored as bool, number or string
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSource {
    #[serde(deserialize_with = "opt_text")]
    pub corpus: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub text_url: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub wikipedia_url: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub text_title: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSpanTag {
    #[serde(deserialize_with = "opt_text")]
    pub fe_id: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub span_sv: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawExample {
    #[serde(deserialize_with = "opt_text")]
    pub sv: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub en: Option<String>,
    #[serde(deserialize_with = "loose_vec")]
    pub fe_tags: Vec<RawSpanTag>,
    pub source: Option<RawSource>,
    pub provenance: Option<RawSource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawElement {
    #[serde(deserialize_with = "opt_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub description_en: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub description_html: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawMention {
    #[serde(deserialize_with = "opt_text")]
    pub fe_id: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub span_en: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawFrame {
    #[serde(deserialize_with = "opt_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub name_en: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub frame_description_en: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub frame_description_html: Option<String>,
    #[serde(deserialize_with = "loose_vec")]
    pub frame_description_fe_mentions: Vec<RawMention>,
    #[serde(deserialize_with = "opt_text")]
    pub note_on_roles_en: Option<String>,
    #[serde(deserialize_with = "loose_vec")]
    pub elements: Vec<RawElement>,
    #[serde(deserialize_with = "loose_vec")]
    pub examples: Vec<RawExample>,
    #[serde(deserialize_with = "loose_vec")]
    pub linked_lexical_units: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub confusable_with: Vec<Value>,
}

/// A frame file: the frame itself plus the constructions it contributes
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawFrameDocument {
    pub frame: Option<RawFrame>,
    #[serde(deserialize_with = "loose_vec")]
    pub constructions: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawGermanSource {
    #[serde(deserialize_with = "opt_text")]
    pub lu_de_normalized: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub lu_de_raw: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawPronunciation {
    #[serde(deserialize_with = "opt_text")]
    pub ipa: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub stress_hint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSense {
    #[serde(deserialize_with = "opt_text")]
    pub meaning_en: Option<String>,
    #[serde(deserialize_with = "loose_vec")]
    pub how_to_use_en: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub patterns: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub common_errors_en: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub examples: Vec<RawExample>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawLexicalUnit {
    #[serde(deserialize_with = "opt_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub display_sv: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub lemma_sv: Option<String>,
    pub source_de: Option<RawGermanSource>,
    #[serde(deserialize_with = "opt_text")]
    pub english_equivalent_en: Option<String>,
    pub pronunciation: Option<RawPronunciation>,
    #[serde(deserialize_with = "opt_text")]
    pub pos: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub cefr: Option<String>,
    pub multiword: Value,
    #[serde(deserialize_with = "loose_vec")]
    pub forms: Vec<Value>,
    pub morphology_sv: Value,
    pub morphology: Value,
    #[serde(deserialize_with = "loose_vec")]
    pub derived_words_sv: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub synonyms_sv: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub antonyms_sv: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub linked_frames: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub senses: Vec<RawSense>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawLexicalUnitDocument {
    pub lexical_unit: Option<RawLexicalUnit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConstruction {
    #[serde(deserialize_with = "opt_text")]
    pub cxn_id: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub cxn_name_user_friendly_en: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub name_user: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub cxn_name_linguistic_sv: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub name_linguistic_sv: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub name_linguistic: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub pattern: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub meaning_en: Option<String>,
    #[serde(deserialize_with = "loose_vec")]
    pub usage_notes_en: Vec<Value>,
    #[serde(deserialize_with = "loose_vec")]
    pub examples: Vec<RawExample>,
}

impl RawConstruction {
    /// Local id: `cxn_id`, else `id`, skipping empty values
    pub fn local_id(&self) -> Option<String> {
        non_empty(self.cxn_id.clone()).or_else(|| non_empty(self.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_textify_object_keys() {
        assert_eq!(textify(&json!({"pattern_sv": "springa till X"})), "springa till X");
        assert_eq!(textify(&json!({"word": "löpa"})), "löpa");
        assert_eq!(textify(&json!(3)), "3");
        assert_eq!(textify(&json!(null)), "");
        assert_eq!(textify(&json!({"other": 1})), "{\"other\":1}");
    }

    #[test]
    fn test_reference_id_shapes() {
        let keys = &["frame_id", "id"];
        assert_eq!(reference_id(&json!("Motion"), keys).as_deref(), Some("Motion"));
        assert_eq!(reference_id(&json!({"frame_id": "Motion"}), keys).as_deref(), Some("Motion"));
        assert_eq!(reference_id(&json!({"id": "Travel"}), keys).as_deref(), Some("Travel"));
        assert_eq!(reference_id(&json!({"frame_id": ""}), keys), None);
        assert_eq!(reference_id(&json!(null), keys), None);
    }

    #[test]
    fn test_loose_list_fields() {
        let sense: RawSense = serde_json::from_value(json!({
            "meaning_en": "to run",
            "how_to_use_en": "Use with a goal",
            "patterns": null
        }))
        .unwrap();
        assert_eq!(sense.how_to_use_en.len(), 1);
        assert!(sense.patterns.is_empty());
    }

    #[test]
    fn test_numeric_ids_become_text() {
        let frame: RawFrame = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(frame.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_truthy() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&Value::Null));
    }
}
