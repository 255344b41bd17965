//! Lexical unit normalization

use serde::Deserialize;
use serde_json::Value;

use crate::error::{LexiconError, LexiconResult};
use crate::types::{
    CommonError, EntityKind, FormValue, LexicalUnit, Morphology, MorphologyBlock, Pronunciation,
    Sense, UsagePattern,
};

use super::example::normalize_examples;
use super::raw::{
    non_empty, reference_id, scalar_text, textify, textify_all, truthy, RawLexicalUnitDocument,
    RawSense,
};

const MORPHOLOGY_NOTE_KEY: &str = "note_en";

fn form_value(value: &Value) -> Option<FormValue> {
    match value {
        Value::Array(items) => Some(FormValue::List(textify_all(items))),
        other => scalar_text(other).map(FormValue::Text),
    }
}

/// Morphology object: `{ "noun": { "indef_sg": "hund", ... }, "note_en": "..." }`.
/// Blocks and forms are taken in document order.
fn parse_morphology(value: &Value) -> Morphology {
    let mut morphology = Morphology::default();
    let Value::Object(map) = value else {
        return morphology;
    };

    for (key, entry) in map {
        match entry {
            Value::Object(forms) => {
                let block: MorphologyBlock = forms
                    .iter()
                    .filter_map(|(k, v)| form_value(v).map(|fv| (k.clone(), fv)))
                    .collect();
                morphology.blocks.insert(key.clone(), block);
            }
            Value::String(note) if key == MORPHOLOGY_NOTE_KEY => {
                morphology.note = note.clone();
            }
            _ => {}
        }
    }
    morphology
}

fn pattern_entry(value: &Value) -> Option<UsagePattern> {
    let pattern = match value {
        Value::Object(map) => {
            let pick = |keys: &[&str]| {
                keys.iter()
                    .filter_map(|k| map.get(*k))
                    .filter_map(scalar_text)
                    .find(|s| !s.is_empty())
                    .unwrap_or_default()
            };
            UsagePattern {
                pattern: pick(&["pattern", "pattern_sv", "text"]),
                note: pick(&["note_en", "note"]),
            }
        }
        other => UsagePattern {
            pattern: textify(other),
            note: String::new(),
        },
    };
    if pattern.pattern.is_empty() && pattern.note.is_empty() {
        None
    } else {
        Some(pattern)
    }
}

fn common_error_entry(value: &Value) -> Option<CommonError> {
    let entry = match value {
        Value::Object(map) => {
            let pick = |keys: &[&str]| {
                keys.iter()
                    .filter_map(|k| map.get(*k))
                    .filter_map(scalar_text)
                    .find(|s| !s.is_empty())
                    .unwrap_or_default()
            };
            CommonError {
                error: pick(&["error"]),
                fix: pick(&["fix"]),
                explanation: pick(&["explain_en", "explanation_en"]),
                text: String::new(),
            }
        }
        other => CommonError {
            text: textify(other),
            ..CommonError::default()
        },
    };
    if entry.searchable_text().is_empty() {
        None
    } else {
        Some(entry)
    }
}

fn normalize_sense(raw: &RawSense) -> Sense {
    Sense {
        meaning: raw.meaning_en.clone().unwrap_or_default(),
        how_to_use: textify_all(&raw.how_to_use_en),
        patterns: raw.patterns.iter().filter_map(pattern_entry).collect(),
        common_errors: raw.common_errors_en.iter().filter_map(common_error_entry).collect(),
        examples: normalize_examples(&raw.examples),
    }
}

pub(crate) fn normalize_lexical_unit_document(
    doc: &Value,
    origin: &str,
) -> LexiconResult<LexicalUnit> {
    let raw =
        RawLexicalUnitDocument::deserialize(doc).map_err(|e| LexiconError::json(origin, e))?;

    let missing = || LexiconError::MissingIdentifier {
        kind: EntityKind::LexicalUnit,
        origin: origin.to_string(),
    };
    let lu = raw.lexical_unit.ok_or_else(missing)?;
    let id = non_empty(lu.id.clone()).ok_or_else(missing)?;

    // `morphology_sv` supersedes the legacy `morphology` block when present
    let morphology = if lu.morphology_sv.is_object() {
        parse_morphology(&lu.morphology_sv)
    } else {
        parse_morphology(&lu.morphology)
    };

    let german = lu
        .source_de
        .as_ref()
        .and_then(|de| de.lu_de_normalized.clone().or_else(|| de.lu_de_raw.clone()))
        .unwrap_or_default();

    let pronunciation = lu
        .pronunciation
        .as_ref()
        .map(|p| Pronunciation {
            ipa: p.ipa.clone().unwrap_or_default(),
            stress_hint: p.stress_hint.clone().unwrap_or_default(),
        })
        .unwrap_or_default();

    let mut linked_frames: Vec<String> = Vec::new();
    for frame_id in lu
        .linked_frames
        .iter()
        .filter_map(|v| reference_id(v, &["frame_id", "id"]))
    {
        if !linked_frames.contains(&frame_id) {
            linked_frames.push(frame_id);
        }
    }

    Ok(LexicalUnit {
        display: lu
            .display_sv
            .clone()
            .or_else(|| lu.lemma_sv.clone())
            .unwrap_or_else(|| id.clone()),
        lemma: lu.lemma_sv.clone().unwrap_or_default(),
        german,
        english: lu.english_equivalent_en.clone().unwrap_or_default(),
        pronunciation,
        pos: lu.pos.clone().unwrap_or_default(),
        cefr: lu.cefr.clone().unwrap_or_default(),
        multiword: truthy(&lu.multiword),
        forms: textify_all(&lu.forms),
        morphology,
        derived_words: textify_all(&lu.derived_words_sv),
        synonyms: textify_all(&lu.synonyms_sv),
        antonyms: textify_all(&lu.antonyms_sv),
        linked_frames,
        senses: lu.senses.iter().map(normalize_sense).collect(),
        id,
    })
}
