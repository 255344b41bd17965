//! Canonical entities and the shared, type-tagged item handle

use std::sync::Arc;

use serde::Serialize;

use super::{Construction, EntityKind, Frame, LexicalUnit};

/// A normalized entity, owned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Frame(Frame),
    LexicalUnit(LexicalUnit),
    Construction(Construction),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Frame(_) => EntityKind::Frame,
            Entity::LexicalUnit(_) => EntityKind::LexicalUnit,
            Entity::Construction(_) => EntityKind::Construction,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entity::Frame(f) => &f.id,
            Entity::LexicalUnit(lu) => &lu.id,
            Entity::Construction(cx) => &cx.id,
        }
    }
}

/// Shared handle to an entity inside a snapshot.
///
/// Cloning is cheap; search rows and relation lookups hand these out
/// instead of copying entities.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Item {
    #[serde(rename = "frame")]
    Frame(Arc<Frame>),
    #[serde(rename = "lu")]
    LexicalUnit(Arc<LexicalUnit>),
    #[serde(rename = "construction")]
    Construction(Arc<Construction>),
}

impl Item {
    pub fn kind(&self) -> EntityKind {
        match self {
            Item::Frame(_) => EntityKind::Frame,
            Item::LexicalUnit(_) => EntityKind::LexicalUnit,
            Item::Construction(_) => EntityKind::Construction,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Item::Frame(f) => &f.id,
            Item::LexicalUnit(lu) => &lu.id,
            Item::Construction(cx) => &cx.id,
        }
    }

    pub fn key(&self) -> String {
        self.kind().key(self.id())
    }

    /// Display title used for prefix scoring and alphabetical ordering
    pub fn title(&self) -> &str {
        match self {
            Item::Frame(f) => f.title(),
            Item::LexicalUnit(lu) => lu.title(),
            Item::Construction(cx) => cx.title(),
        }
    }

    /// Secondary line shown under the title in result lists
    pub fn meta(&self) -> String {
        match self {
            Item::Frame(f) => f.id.clone(),
            Item::LexicalUnit(lu) => [&lu.lemma, &lu.pos, &lu.cefr]
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" · "),
            Item::Construction(cx) => {
                if cx.linguistic_name.is_empty() {
                    cx.pattern.clone()
                } else {
                    cx.linguistic_name.clone()
                }
            }
        }
    }

    /// Whether this item belongs to the given frame for frame filtering
    pub fn in_frame(&self, frame_id: &str) -> bool {
        match self {
            Item::Frame(f) => f.id == frame_id,
            Item::LexicalUnit(lu) => lu.links_frame(frame_id),
            Item::Construction(cx) => cx.owned_by(frame_id),
        }
    }

    pub fn as_frame(&self) -> Option<&Arc<Frame>> {
        match self {
            Item::Frame(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_lexical_unit(&self) -> Option<&Arc<LexicalUnit>> {
        match self {
            Item::LexicalUnit(lu) => Some(lu),
            _ => None,
        }
    }
}

impl From<Entity> for Item {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Frame(f) => Item::Frame(Arc::new(f)),
            Entity::LexicalUnit(lu) => Item::LexicalUnit(Arc::new(lu)),
            Entity::Construction(cx) => Item::Construction(Arc::new(cx)),
        }
    }
}
