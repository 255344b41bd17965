//! Entity kinds and composite keys

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three kinds of dictionary entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "frame")]
    Frame,
    #[serde(rename = "lu")]
    LexicalUnit,
    #[serde(rename = "construction")]
    Construction,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::LexicalUnit,
        EntityKind::Construction,
        EntityKind::Frame,
    ];

    /// Key prefix used in composite keys and route fragments
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Frame => "frame",
            EntityKind::LexicalUnit => "lu",
            EntityKind::Construction => "construction",
        }
    }

    /// Plural heading used when grouping results
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Frame => "Frames",
            EntityKind::LexicalUnit => "Lexical Units",
            EntityKind::Construction => "Constructions",
        }
    }

    /// Composite key `"<kind>:<id>"`, unique across all kinds
    pub fn key(&self, id: &str) -> String {
        format!("{}:{}", self.as_str(), id)
    }

    /// Split a composite key into kind and id.
    /// Construction ids contain `::`, so only the first `:` separates.
    pub fn split_key(key: &str) -> Option<(EntityKind, &str)> {
        let (prefix, id) = key.split_once(':')?;
        let kind = prefix.parse().ok()?;
        if id.is_empty() {
            return None;
        }
        Some((kind, id))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frame" | "frames" => Ok(EntityKind::Frame),
            "lu" | "lus" | "lexical_unit" | "lexical-unit" => Ok(EntityKind::LexicalUnit),
            "construction" | "constructions" | "cx" => Ok(EntityKind::Construction),
            other => Err(format!("unknown entry kind '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        let key = EntityKind::LexicalUnit.key("springa");
        assert_eq!(key, "lu:springa");
        assert_eq!(
            EntityKind::split_key(&key),
            Some((EntityKind::LexicalUnit, "springa"))
        );
    }

    #[test]
    fn test_split_construction_key() {
        let (kind, id) = EntityKind::split_key("construction:Motion::cx1").unwrap();
        assert_eq!(kind, EntityKind::Construction);
        assert_eq!(id, "Motion::cx1");
    }

    #[test]
    fn test_split_invalid_keys() {
        assert!(EntityKind::split_key("motion").is_none());
        assert!(EntityKind::split_key("verb:x").is_none());
        assert!(EntityKind::split_key("frame:").is_none());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("LU".parse::<EntityKind>(), Ok(EntityKind::LexicalUnit));
        assert_eq!("frames".parse::<EntityKind>(), Ok(EntityKind::Frame));
        assert!("noun".parse::<EntityKind>().is_err());
    }
}
