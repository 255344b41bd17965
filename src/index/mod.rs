//! Snapshot indexes
//!
//! Identity maps per kind, the two frame relation maps and the flat item
//! list the search engine scans. Built in one pass over a normalized
//! dataset; never mutated afterwards.

mod multimap;

pub use multimap::OrderedMultiMap;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::types::{Construction, EntityKind, Frame, Item, LexicalUnit};

/// A relation pointing at a frame id that is not in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Key of the entry holding the reference
    pub source: String,
    #[serde(rename = "missingFrameId")]
    pub missing_frame_id: String,
}

/// Anomalies found while indexing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexDiagnostics {
    pub dangling: Vec<DanglingReference>,
    /// Keys supplied more than once; the last document supplied wins
    #[serde(rename = "duplicateKeys")]
    pub duplicate_keys: Vec<String>,
}

impl IndexDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicate_keys.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Indexes {
    pub frames_by_id: HashMap<String, Arc<Frame>>,
    pub lexical_units_by_id: HashMap<String, Arc<LexicalUnit>>,
    pub constructions_by_id: HashMap<String, Arc<Construction>>,
    /// frame id → lexical unit ids, in unit order
    pub frame_to_lexical_units: OrderedMultiMap<String, String>,
    /// frame id → construction ids, in construction order
    pub frame_to_constructions: OrderedMultiMap<String, String>,
    /// Lexical units, then constructions, then frames
    pub items: Vec<Item>,
    pub diagnostics: IndexDiagnostics,
}

/// Deduplicate by id: the last entity wins the slot, the first occurrence
/// fixes its position.
fn identity<T>(
    entities: Vec<T>,
    kind: EntityKind,
    id_of: impl Fn(&T) -> &str,
    duplicates: &mut Vec<String>,
) -> (HashMap<String, Arc<T>>, Vec<Arc<T>>) {
    let mut by_id: HashMap<String, Arc<T>> = HashMap::with_capacity(entities.len());
    let mut order: Vec<String> = Vec::with_capacity(entities.len());

    for entity in entities {
        let id = id_of(&entity).to_string();
        if by_id.insert(id.clone(), Arc::new(entity)).is_some() {
            duplicates.push(kind.key(&id));
        } else {
            order.push(id);
        }
    }

    let ordered = order.iter().filter_map(|id| by_id.get(id).cloned()).collect();
    (by_id, ordered)
}

/// Build every index of a snapshot
pub fn build_indexes(
    frames: Vec<Frame>,
    lexical_units: Vec<LexicalUnit>,
    constructions: Vec<Construction>,
) -> Indexes {
    let mut diagnostics = IndexDiagnostics::default();

    let (frames_by_id, frames) = identity(
        frames,
        EntityKind::Frame,
        |f| f.id.as_str(),
        &mut diagnostics.duplicate_keys,
    );
    let (lexical_units_by_id, lexical_units) = identity(
        lexical_units,
        EntityKind::LexicalUnit,
        |lu| lu.id.as_str(),
        &mut diagnostics.duplicate_keys,
    );
    let (constructions_by_id, constructions) = identity(
        constructions,
        EntityKind::Construction,
        |cx| cx.id.as_str(),
        &mut diagnostics.duplicate_keys,
    );

    let mut frame_to_lexical_units = OrderedMultiMap::new();
    for lu in &lexical_units {
        for frame_id in &lu.linked_frames {
            if frames_by_id.contains_key(frame_id) {
                frame_to_lexical_units.push_unique(frame_id.clone(), lu.id.clone());
            } else {
                diagnostics.dangling.push(DanglingReference {
                    source: lu.key(),
                    missing_frame_id: frame_id.clone(),
                });
            }
        }
    }

    let mut frame_to_constructions = OrderedMultiMap::new();
    for cx in &constructions {
        for frame_id in &cx.frames {
            if frames_by_id.contains_key(frame_id) {
                frame_to_constructions.push_unique(frame_id.clone(), cx.id.clone());
            } else {
                diagnostics.dangling.push(DanglingReference {
                    source: cx.key(),
                    missing_frame_id: frame_id.clone(),
                });
            }
        }
    }

    let items = lexical_units
        .into_iter()
        .map(Item::LexicalUnit)
        .chain(constructions.into_iter().map(Item::Construction))
        .chain(frames.into_iter().map(Item::Frame))
        .collect();

    Indexes {
        frames_by_id,
        lexical_units_by_id,
        constructions_by_id,
        frame_to_lexical_units,
        frame_to_constructions,
        items,
        diagnostics,
    }
}

impl Indexes {
    pub fn frame(&self, id: &str) -> Option<&Arc<Frame>> {
        self.frames_by_id.get(id)
    }

    pub fn lexical_unit(&self, id: &str) -> Option<&Arc<LexicalUnit>> {
        self.lexical_units_by_id.get(id)
    }

    pub fn construction(&self, id: &str) -> Option<&Arc<Construction>> {
        self.constructions_by_id.get(id)
    }

    /// Look up any entry by kind and id
    pub fn item(&self, kind: EntityKind, id: &str) -> Option<Item> {
        match kind {
            EntityKind::Frame => self.frame(id).cloned().map(Item::Frame),
            EntityKind::LexicalUnit => self.lexical_unit(id).cloned().map(Item::LexicalUnit),
            EntityKind::Construction => self.construction(id).cloned().map(Item::Construction),
        }
    }

    /// Look up an entry by its composite key, e.g. `lu:springa`
    pub fn item_by_key(&self, key: &str) -> Option<Item> {
        let (kind, id) = EntityKind::split_key(key)?;
        self.item(kind, id)
    }

    pub fn lexical_units_of_frame(&self, frame_id: &str) -> Vec<Arc<LexicalUnit>> {
        self.frame_to_lexical_units
            .get(frame_id)
            .iter()
            .filter_map(|id| self.lexical_unit(id).cloned())
            .collect()
    }

    pub fn constructions_of_frame(&self, frame_id: &str) -> Vec<Arc<Construction>> {
        self.frame_to_constructions
            .get(frame_id)
            .iter()
            .filter_map(|id| self.construction(id).cloned())
            .collect()
    }

    pub fn frame_count(&self) -> usize {
        self.frames_by_id.len()
    }

    pub fn lexical_unit_count(&self) -> usize {
        self.lexical_units_by_id.len()
    }

    pub fn construction_count(&self) -> usize {
        self.constructions_by_id.len()
    }
}
