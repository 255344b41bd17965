//! Frame normalization

use serde::Deserialize;
use serde_json::Value;

use crate::error::{LexiconError, LexiconResult};
use crate::types::{Construction, ElementMention, EntityKind, Frame, FrameElement};

use super::example::normalize_examples;
use super::raw::{non_empty, reference_id, RawConstruction, RawFrameDocument};

/// Parse a frame document. Returns the frame and the raw construction
/// entries it carries, which are normalized separately against the frame.
pub(crate) fn normalize_frame_document(
    doc: &Value,
    origin: &str,
) -> LexiconResult<(Frame, Vec<Value>)> {
    let raw = RawFrameDocument::deserialize(doc).map_err(|e| LexiconError::json(origin, e))?;

    let missing = || LexiconError::MissingIdentifier {
        kind: EntityKind::Frame,
        origin: origin.to_string(),
    };
    let fr = raw.frame.ok_or_else(missing)?;
    let id = non_empty(fr.id.clone()).ok_or_else(missing)?;

    let elements = fr
        .elements
        .iter()
        .map(|e| {
            let element_id = e.id.clone().unwrap_or_default();
            let name = non_empty(e.name.clone()).unwrap_or_else(|| element_id.clone());
            FrameElement {
                id: if element_id.is_empty() { name.clone() } else { element_id },
                name,
                description: e.description_en.clone().unwrap_or_default(),
                description_html: e.description_html.clone().unwrap_or_default(),
            }
        })
        .collect();

    let element_mentions = fr
        .frame_description_fe_mentions
        .iter()
        .filter_map(|m| {
            let element_id = non_empty(m.fe_id.clone())?;
            let span = non_empty(m.span_en.clone())?;
            Some(ElementMention { element_id, span })
        })
        .collect();

    let mut construction_ids: Vec<String> = Vec::new();
    for cxn in &raw.constructions {
        let local_id = RawConstruction::deserialize(cxn)
            .ok()
            .filter(|_| cxn.is_object())
            .and_then(|c| c.local_id());
        if let Some(local_id) = local_id {
            let cx_id = Construction::synthetic_id(&id, &local_id);
            if !construction_ids.contains(&cx_id) {
                construction_ids.push(cx_id);
            }
        }
    }

    let frame = Frame {
        name: fr.name_en.clone().unwrap_or_else(|| id.clone()),
        slug: fr.slug.clone().unwrap_or_default(),
        description: fr.frame_description_en.clone().unwrap_or_default(),
        description_html: fr.frame_description_html.clone().unwrap_or_default(),
        element_mentions,
        note_on_roles: fr.note_on_roles_en.clone().unwrap_or_default(),
        elements,
        examples: normalize_examples(&fr.examples),
        linked_lexical_units: fr
            .linked_lexical_units
            .iter()
            .filter_map(|v| reference_id(v, &["lu_id", "id"]))
            .collect(),
        confusable_with: fr
            .confusable_with
            .iter()
            .filter_map(|v| reference_id(v, &["frame_id", "id"]))
            .collect(),
        construction_ids,
        id,
    };

    Ok((frame, raw.constructions))
}
