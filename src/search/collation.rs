//! Swedish collation
//!
//! A three-level comparison in the spirit of the Swedish CLDR tailoring:
//!
//! 1. primary: character class, then letter. The alphabet runs A–Z, Å, Ä, Ö;
//!    Æ sorts with Ä, Ø with Ö and Ü with Y. Other accented Latin letters
//!    fold to their base letter. Case is ignored.
//! 2. secondary: accents
//! 3. tertiary: case, lower before upper
//!
//! Remaining ties fall back to code point order so the comparison is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Character classes in primary order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Separator,
    Digit,
    Letter,
    OtherLetter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Primary {
    class: CharClass,
    weight: u32,
}

struct CharWeights {
    primary: Primary,
    secondary: u32,
    tertiary: u8,
}

const A_RING: u32 = 27;
const A_DIAERESIS: u32 = 28;
const O_DIAERESIS: u32 = 29;

fn latin_letter(c: char) -> Option<u32> {
    c.is_ascii_lowercase().then(|| c as u32 - 'a' as u32 + 1)
}

fn weigh(c: char) -> CharWeights {
    let tertiary = u8::from(c.is_uppercase());
    let lower = c.to_lowercase().next().unwrap_or(c);

    let letter = |weight: u32, secondary: u32| CharWeights {
        primary: Primary {
            class: CharClass::Letter,
            weight,
        },
        secondary,
        tertiary,
    };

    // Swedish letters and their tailored variants
    match lower {
        'å' => return letter(A_RING, 0),
        'ä' => return letter(A_DIAERESIS, 0),
        'æ' => return letter(A_DIAERESIS, 1),
        'ö' => return letter(O_DIAERESIS, 0),
        'ø' => return letter(O_DIAERESIS, 1),
        'ü' => return letter(25, 1),
        _ => {}
    }

    let mut decomposed = std::iter::once(lower).nfd();
    let base = decomposed.next().unwrap_or(lower);
    let accent = decomposed.fold(0u32, |acc, mark| acc.wrapping_mul(31).wrapping_add(mark as u32));

    if let Some(weight) = latin_letter(base) {
        return letter(weight, accent);
    }

    let (class, weight) = if c.is_whitespace() || c.is_ascii_punctuation() || is_general_punctuation(c) {
        (CharClass::Separator, c as u32)
    } else if let Some(d) = c.to_digit(10) {
        (CharClass::Digit, d)
    } else if c.is_numeric() {
        (CharClass::Digit, 10 + c as u32)
    } else if c.is_alphabetic() {
        (CharClass::OtherLetter, base as u32)
    } else {
        (CharClass::Other, c as u32)
    };

    CharWeights {
        primary: Primary { class, weight },
        secondary: accent,
        tertiary,
    }
}

fn is_general_punctuation(c: char) -> bool {
    matches!(c, '\u{00A1}'..='\u{00BF}' | '\u{2010}'..='\u{205E}')
}

/// Precomputed comparison key; `Ord` follows the collation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    primary: Vec<Primary>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
    raw: String,
}

pub fn sort_key(text: &str) -> SortKey {
    let mut key = SortKey {
        primary: Vec::with_capacity(text.len()),
        secondary: Vec::with_capacity(text.len()),
        tertiary: Vec::with_capacity(text.len()),
        raw: text.to_string(),
    };
    for c in text.chars() {
        let w = weigh(c);
        key.primary.push(w.primary);
        key.secondary.push(w.secondary);
        key.tertiary.push(w.tertiary);
    }
    key
}

/// Compare two strings in Swedish order
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn test_swedish_letters_after_z() {
        assert_eq!(
            sorted(&["öl", "år", "zebra", "äpple", "apa"]),
            vec!["apa", "zebra", "år", "äpple", "öl"]
        );
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(sorted(&["Banan", "apa", "Citron"]), vec!["apa", "Banan", "Citron"]);
        assert_eq!(compare("apa", "Apa"), Ordering::Less);
    }

    #[test]
    fn test_accents_fold_to_base() {
        assert_eq!(sorted(&["ef", "éa", "eb"]), vec!["éa", "eb", "ef"]);
        assert_eq!(compare("e", "é"), Ordering::Less);
    }

    #[test]
    fn test_tailored_variants() {
        assert_eq!(sorted(&["ö", "ø", "æ", "ä"]), vec!["ä", "æ", "ö", "ø"]);
        assert_eq!(sorted(&["z", "ü", "y"]), vec!["y", "ü", "z"]);
    }

    #[test]
    fn test_class_order() {
        assert_eq!(sorted(&["b", "1", " a", "€"]), vec![" a", "1", "b", "€"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("gå", "gående"), Ordering::Less);
    }
}
