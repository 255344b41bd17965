//! Type and advanced filters

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{EntityKind, Item};

/// Entry kinds a search is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledTypes(BTreeSet<EntityKind>);

impl EnabledTypes {
    pub fn all() -> Self {
        Self(EntityKind::ALL.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn only(kind: EntityKind) -> Self {
        Self(BTreeSet::from([kind]))
    }

    /// Parse a list of kind names. Unknown names are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .filter_map(|n| n.as_ref().trim().parse::<EntityKind>().ok())
                .collect(),
        )
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn insert(&mut self, kind: EntityKind) {
        self.0.insert(kind);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for EnabledTypes {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<EntityKind> for EnabledTypes {
    fn from_iter<T: IntoIterator<Item = EntityKind>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Part-of-speech and frame filters. Blank values are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedFilters {
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub frame: String,
}

impl AdvancedFilters {
    pub fn new(pos: impl Into<String>, frame: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            frame: frame.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.pos.trim().is_empty() || !self.frame.trim().is_empty()
    }

    /// Whether an item passes both filters.
    ///
    /// Part of speech only applies to lexical units, so an active pos filter
    /// excludes every other kind.
    pub fn accepts(&self, item: &Item) -> bool {
        let pos = self.pos.trim();
        let frame = self.frame.trim();

        if !pos.is_empty() {
            match item {
                Item::LexicalUnit(lu) if lu.pos == pos => {}
                _ => return false,
            }
        }
        frame.is_empty() || item.in_frame(frame)
    }
}
