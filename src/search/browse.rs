//! A–Z browsing

use serde::{Deserialize, Serialize};

use crate::types::{EntityKind, Item};

use super::collation::sort_key;

/// Letters of the browse bar, in Swedish order
pub const BROWSE_LETTERS: [&str; 29] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z", "Å", "Ä", "Ö",
];

/// Bucket for titles that start with anything else
pub const OTHER_BUCKET: &str = "#";

pub const DEFAULT_BROWSE_LIMIT: usize = 400;

/// Browse bucket of a title: its upper-cased first character if that is a
/// browse letter, otherwise `#`
pub fn first_letter(title: &str) -> &'static str {
    let Some(first) = title.trim().chars().next() else {
        return OTHER_BUCKET;
    };
    let mut upper = first.to_uppercase();
    let (Some(c), None) = (upper.next(), upper.next()) else {
        return OTHER_BUCKET;
    };
    let mut buf = [0u8; 4];
    let letter: &str = c.encode_utf8(&mut buf);
    BROWSE_LETTERS
        .iter()
        .find(|l| **l == letter)
        .copied()
        .unwrap_or(OTHER_BUCKET)
}

/// One browse listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowsePage {
    pub kind: EntityKind,
    pub letter: String,
    /// Entries in the bucket before the limit was applied
    pub total: usize,
    pub entries: Vec<BrowseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseEntry {
    pub key: String,
    pub id: String,
    pub title: String,
    pub meta: String,
}

impl From<&Item> for BrowseEntry {
    fn from(item: &Item) -> Self {
        Self {
            key: item.key(),
            id: item.id().to_string(),
            title: item.title().to_string(),
            meta: item.meta(),
        }
    }
}

/// Items of one kind whose title falls in the letter's bucket, in Swedish
/// order, truncated to `limit`
pub fn browse(kind: EntityKind, letter: &str, limit: usize, items: &[Item]) -> BrowsePage {
    let wanted = letter.trim().to_uppercase();

    let mut bucket: Vec<&Item> = items
        .iter()
        .filter(|i| i.kind() == kind && first_letter(i.title()) == wanted)
        .collect();
    bucket.sort_by_cached_key(|i| sort_key(i.title()));

    BrowsePage {
        kind,
        letter: wanted,
        total: bucket.len(),
        entries: bucket.into_iter().take(limit).map(BrowseEntry::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Frame, LexicalUnit};
    use std::sync::Arc;

    fn lu(id: &str, display: &str) -> Item {
        Item::LexicalUnit(Arc::new(LexicalUnit::new(id, display)))
    }

    #[test]
    fn test_first_letter_buckets() {
        assert_eq!(first_letter("springa"), "S");
        assert_eq!(first_letter("  åka"), "Å");
        assert_eq!(first_letter("Öga"), "Ö");
        assert_eq!(first_letter("éclair"), "#");
        assert_eq!(first_letter("3D"), "#");
        assert_eq!(first_letter(""), "#");
        assert_eq!(first_letter("ßx"), "#");
    }

    #[test]
    fn test_browse_filters_kind_and_letter() {
        let items = vec![
            lu("1", "äta"),
            lu("2", "Ärlig"),
            lu("3", "apa"),
            Item::Frame(Arc::new(Frame::new("Ä", "Äventyr"))),
        ];
        let page = browse(EntityKind::LexicalUnit, "ä", DEFAULT_BROWSE_LIMIT, &items);
        assert_eq!(page.letter, "Ä");
        let titles: Vec<&str> = page.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Ärlig", "äta"]);
    }

    #[test]
    fn test_browse_limit() {
        let items: Vec<Item> = (0..10).map(|i| lu(&i.to_string(), &format!("b{}", i))).collect();
        let page = browse(EntityKind::LexicalUnit, "B", 3, &items);
        assert_eq!(page.total, 10);
        assert_eq!(page.entries.len(), 3);
        assert_eq!(page.entries[0].title, "b0");
    }

    #[test]
    fn test_other_bucket() {
        let items = vec![lu("1", "2-dag"), lu("2", "dag")];
        let page = browse(EntityKind::LexicalUnit, "#", 10, &items);
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].id, "1");
    }
}
