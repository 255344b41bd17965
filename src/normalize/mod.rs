//! Normalization of raw dataset documents
//!
//! Raw documents are loosely typed JSON: optional fields, alternative key
//! names, scalars where lists are expected. Normalization turns them into the
//! canonical records in [`crate::types`], applying a fixed fallback chain per
//! field. Nothing here touches the filesystem.

mod construction;
mod example;
mod frame;
mod lexical_unit;
mod raw;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{LexiconError, LexiconResult};
use crate::types::{Construction, Entity, EntityKind, Frame, LexicalUnit};

/// A raw document tagged with the kind it is expected to hold
#[derive(Debug, Clone)]
pub enum RawDocument {
    /// A frame file: `{ "frame": {...}, "constructions": [...] }`
    Frame { doc: Value, origin: String },
    /// A lexical unit file: `{ "lexical_unit": {...} }`
    LexicalUnit { doc: Value, origin: String },
    /// One entry of a frame's `constructions` array
    Construction { owner_frame_id: String, doc: Value },
}

/// Normalize a single raw document into its canonical entity.
///
/// Fails with [`LexiconError::MissingIdentifier`] when the mandatory id is
/// absent or empty.
pub fn normalize(raw: &RawDocument) -> LexiconResult<Entity> {
    match raw {
        RawDocument::Frame { doc, origin } => {
            frame::normalize_frame_document(doc, origin).map(|(f, _)| Entity::Frame(f))
        }
        RawDocument::LexicalUnit { doc, origin } => {
            lexical_unit::normalize_lexical_unit_document(doc, origin).map(Entity::LexicalUnit)
        }
        RawDocument::Construction {
            owner_frame_id,
            doc,
        } => construction::normalize_construction(owner_frame_id, doc)?
            .map(Entity::Construction)
            .ok_or_else(|| LexiconError::MissingIdentifier {
                kind: EntityKind::Construction,
                origin: format!("constructions of frame {}", owner_frame_id),
            }),
    }
}

/// A parsed JSON document and where it came from
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub origin: String,
    pub doc: Value,
}

impl SourceDocument {
    pub fn new(origin: impl Into<String>, doc: Value) -> Self {
        Self {
            origin: origin.into(),
            doc,
        }
    }
}

/// Every raw document of a dataset, in manifest order
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    pub frames: Vec<SourceDocument>,
    pub lexical_units: Vec<SourceDocument>,
}

/// Entries dropped or merged while assembling a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeDiagnostics {
    /// Embedded construction entries that were not objects or had no local id
    #[serde(rename = "skippedConstructions")]
    pub skipped_constructions: usize,
    /// Construction entries folded into an already seen synthetic id
    #[serde(rename = "mergedConstructions")]
    pub merged_constructions: usize,
}

/// A fully normalized dataset, ready for indexing
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub frames: Vec<Frame>,
    pub lexical_units: Vec<LexicalUnit>,
    pub constructions: Vec<Construction>,
    pub diagnostics: NormalizeDiagnostics,
}

impl Dataset {
    /// Normalize every document and collect the embedded constructions.
    ///
    /// Any frame or lexical unit without an id aborts the whole dataset.
    /// Constructions sharing a synthetic id are merged into the first one
    /// seen, with the owning frames unioned in contribution order.
    pub fn from_raw(raw: &RawDataset) -> LexiconResult<Self> {
        let mut dataset = Dataset::default();
        let mut construction_slots: HashMap<String, usize> = HashMap::new();

        for source in &raw.frames {
            let (frame, cxns) = frame::normalize_frame_document(&source.doc, &source.origin)?;

            for cxn in &cxns {
                let Some(cx) = construction::normalize_construction(&frame.id, cxn)? else {
                    dataset.diagnostics.skipped_constructions += 1;
                    continue;
                };
                match construction_slots.get(&cx.id) {
                    Some(&slot) => {
                        dataset.constructions[slot].add_owner(&frame.id);
                        dataset.diagnostics.merged_constructions += 1;
                    }
                    None => {
                        construction_slots.insert(cx.id.clone(), dataset.constructions.len());
                        dataset.constructions.push(cx);
                    }
                }
            }

            dataset.frames.push(frame);
        }

        for source in &raw.lexical_units {
            dataset
                .lexical_units
                .push(lexical_unit::normalize_lexical_unit_document(
                    &source.doc,
                    &source.origin,
                )?);
        }

        Ok(dataset)
    }
}
