//! Lexical unit entries

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{EntityKind, Example};

/// A morphology cell: either a single form or a list of alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    List(Vec<String>),
}

impl FormValue {
    pub fn has_value(&self) -> bool {
        match self {
            FormValue::Text(text) => !text.trim().is_empty(),
            FormValue::List(items) => !items.is_empty(),
        }
    }

    /// Render for display, joining alternatives with ", "
    pub fn joined(&self) -> String {
        match self {
            FormValue::Text(text) => text.clone(),
            FormValue::List(items) => items.join(", "),
        }
    }
}

/// String-keyed entries kept in document order. Inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedEntries<V>(Vec<(String, V)>);

impl<V> Default for OrderedEntries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedEntries<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn insert(&mut self, key: String, value: V) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedEntries<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (key, value) in iter {
            entries.insert(key, value);
        }
        entries
    }
}

impl<V: Serialize> Serialize for OrderedEntries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct OrderedEntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedEntriesVisitor<V> {
    type Value = OrderedEntries<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = OrderedEntries::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.insert(key, value);
        }
        Ok(entries)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedEntriesVisitor(PhantomData))
    }
}

/// Forms of one part-of-speech category, keyed by form name
pub type MorphologyBlock = OrderedEntries<FormValue>;

/// Morphology keyed by part-of-speech category (`noun`, `verb`, `adjective`).
/// Blocks and forms keep the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphology {
    #[serde(default)]
    pub blocks: OrderedEntries<MorphologyBlock>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl Morphology {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.note.is_empty()
    }
}

/// One row of the rendered form table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Forms selected for a unit's part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormTable {
    pub category: String,
    pub rows: Vec<FormRow>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
}

const HIDDEN_FORM_KEYS: &[&str] = &["particle_or_reflexive"];
const NOTE_KEY: &str = "note_en";

fn shows_form(key: &str, value: &FormValue) -> bool {
    if HIDDEN_FORM_KEYS.contains(&key) || key == NOTE_KEY {
        return false;
    }
    if key == "alternatives" && matches!(value, FormValue::List(items) if items.is_empty()) {
        return false;
    }
    value.has_value()
}

fn block_has_forms(block: &MorphologyBlock) -> bool {
    block.iter().any(|(k, v)| shows_form(k, v))
}

/// Human label for a morphology key
pub fn form_label(key: &str) -> String {
    let label = match key {
        "gender" => "Gender",
        "indef_sg" => "Indefinite singular",
        "def_sg" => "Definite singular",
        "indef_pl" => "Indefinite plural",
        "def_pl" => "Definite plural",
        "infinitive" => "Infinitive",
        "present" => "Present",
        "past" => "Past",
        "supine" => "Supine",
        "imperative" => "Imperative",
        "present_participle" => "Present participle",
        "past_participle" => "Past participle",
        "base" => "Base form",
        "comparative" => "Comparative",
        "superlative" => "Superlative",
        "neuter" => "Neuter",
        "plural_def" => "Plural (definite)",
        "note_en" => "Note",
        other => return other.replace('_', " "),
    };
    label.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipa: String,
    #[serde(rename = "stressHint", default, skip_serializing_if = "String::is_empty")]
    pub stress_hint: String,
}

/// A usage pattern with an optional explanatory note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePattern {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

/// A typical learner error. Free-text entries only carry `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonError {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl CommonError {
    /// All non-empty parts joined by spaces
    pub fn searchable_text(&self) -> String {
        [&self.text, &self.error, &self.fix, &self.explanation]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One meaning of a lexical unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub meaning: String,
    #[serde(rename = "howToUse", default)]
    pub how_to_use: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<UsagePattern>,
    #[serde(rename = "commonErrors", default)]
    pub common_errors: Vec<CommonError>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// Dictionary entry evoking one or more frames
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalUnit {
    pub id: String,
    pub display: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub german: String,
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub pronunciation: Pronunciation,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub cefr: String,
    #[serde(default)]
    pub multiword: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<String>,
    #[serde(default)]
    pub morphology: Morphology,
    #[serde(rename = "derivedWords", default)]
    pub derived_words: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    /// Frame ids this unit evokes (may dangle)
    #[serde(rename = "linkedFrames", default)]
    pub linked_frames: Vec<String>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

impl LexicalUnit {
    /// Create a lexical unit with only an id and a display form
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            ..Self::default()
        }
    }

    pub fn key(&self) -> String {
        EntityKind::LexicalUnit.key(&self.id)
    }

    /// Display title, falling back to the id
    pub fn title(&self) -> &str {
        if self.display.is_empty() {
            &self.id
        } else {
            &self.display
        }
    }

    /// First linked frame, used as the unit's primary frame
    pub fn primary_frame_id(&self) -> Option<&str> {
        self.linked_frames.first().map(String::as_str)
    }

    pub fn links_frame(&self, frame_id: &str) -> bool {
        self.linked_frames.iter().any(|f| f == frame_id)
    }

    /// Select the morphology block that fits this unit's part of speech.
    ///
    /// Prefers the block named after the part of speech; when that block has
    /// no visible forms, the first non-empty block in fallback order is used
    /// (verb first for multiword units).
    pub fn forms_for_pos(&self) -> Option<FormTable> {
        let pos = self.pos.to_lowercase();
        let preferred = if pos.contains("noun") {
            Some("noun")
        } else if pos.contains("verb") {
            Some("verb")
        } else if pos.contains("adj") {
            Some("adjective")
        } else {
            None
        };

        let blocks = &self.morphology.blocks;
        let mut selected = preferred
            .and_then(|name| blocks.get(name).map(|block| (name, block)))
            .filter(|(_, block)| block_has_forms(block));

        if selected.is_none() {
            let order: [&str; 3] = if pos.contains("multiword") {
                ["verb", "noun", "adjective"]
            } else {
                ["noun", "verb", "adjective"]
            };
            selected = order.into_iter().find_map(|name| {
                blocks
                    .get(name)
                    .filter(|block| block_has_forms(block))
                    .map(|block| (name, block))
            });
        }

        let (category, block) = selected?;

        let rows = block
            .iter()
            .filter(|(k, v)| shows_form(k, v))
            .map(|(k, v)| FormRow {
                key: k.clone(),
                label: form_label(k),
                value: v.joined(),
            })
            .collect();

        let note = match block.get(NOTE_KEY) {
            Some(value) if value.has_value() => value.joined().trim().to_string(),
            _ => self.morphology.note.trim().to_string(),
        };

        Some(FormTable {
            category: category.to_string(),
            rows,
            note,
        })
    }
}
