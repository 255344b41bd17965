//! Construction normalization

use serde::Deserialize;
use serde_json::Value;

use crate::error::{LexiconError, LexiconResult};
use crate::types::Construction;

use super::example::normalize_examples;
use super::raw::{textify_all, RawConstruction};

/// Normalize one embedded construction entry of a frame.
///
/// Returns `Ok(None)` when the entry is not an object or carries no local id.
pub(crate) fn normalize_construction(
    owner_frame_id: &str,
    doc: &Value,
) -> LexiconResult<Option<Construction>> {
    if !doc.is_object() {
        return Ok(None);
    }
    let origin = format!("constructions of frame {}", owner_frame_id);
    let raw = RawConstruction::deserialize(doc).map_err(|e| LexiconError::json(&origin, e))?;

    let Some(local_id) = raw.local_id() else {
        return Ok(None);
    };

    // First present value wins, even when empty
    let name = raw
        .cxn_name_user_friendly_en
        .clone()
        .or_else(|| raw.name_user.clone())
        .or_else(|| raw.name.clone())
        .unwrap_or_else(|| local_id.clone());
    let linguistic_name = raw
        .cxn_name_linguistic_sv
        .clone()
        .or_else(|| raw.name_linguistic_sv.clone())
        .or_else(|| raw.name_linguistic.clone())
        .unwrap_or_default();

    let mut construction = Construction::new(owner_frame_id, &local_id, name);
    construction.linguistic_name = linguistic_name;
    construction.pattern = raw.pattern.clone().unwrap_or_default();
    construction.meaning = raw.meaning_en.clone().unwrap_or_default();
    construction.usage_notes = textify_all(&raw.usage_notes_en);
    construction.examples = normalize_examples(&raw.examples);
    Ok(Some(construction))
}
