//! Searchable text per entry kind

use crate::types::{Construction, Frame, Item, LexicalUnit, Sense};

/// Lower-cased, space-joined text a query token is matched against
pub fn searchable_text(item: &Item) -> String {
    match item {
        Item::Frame(f) => frame_text(f),
        Item::LexicalUnit(lu) => lexical_unit_text(lu),
        Item::Construction(cx) => construction_text(cx),
    }
}

/// Frame fields are joined as-is: empty fields still contribute a separator,
/// which shifts token positions.
fn frame_text(frame: &Frame) -> String {
    let mut parts: Vec<&str> = vec![
        frame.id.as_str(),
        frame.name.as_str(),
        frame.slug.as_str(),
        frame.description.as_str(),
    ];
    parts.extend(frame.elements.iter().map(|e| {
        if e.name.is_empty() {
            e.id.as_str()
        } else {
            e.name.as_str()
        }
    }));
    parts.join(" ").to_lowercase()
}

fn sense_parts(sense: &Sense) -> Vec<String> {
    let mut parts = vec![sense.meaning.clone()];
    parts.extend(sense.how_to_use.iter().cloned());
    for pattern in &sense.patterns {
        parts.push(pattern.pattern.clone());
        parts.push(pattern.note.clone());
    }
    parts.extend(sense.common_errors.iter().map(|e| e.searchable_text()));
    parts
}

fn lexical_unit_text(lu: &LexicalUnit) -> String {
    let mut parts: Vec<String> = vec![
        lu.id.clone(),
        lu.display.clone(),
        lu.lemma.clone(),
        lu.german.clone(),
        lu.english.clone(),
        lu.pos.clone(),
        lu.cefr.clone(),
    ];
    parts.extend(lu.linked_frames.iter().cloned());
    parts.extend(lu.senses.iter().flat_map(sense_parts));
    parts.extend(lu.synonyms.iter().cloned());
    parts.extend(lu.antonyms.iter().cloned());
    parts.extend(lu.derived_words.iter().cloned());
    join_non_empty(parts.iter().map(String::as_str))
}

fn construction_text(cx: &Construction) -> String {
    let head = [
        cx.id.as_str(),
        cx.name.as_str(),
        cx.linguistic_name.as_str(),
        cx.pattern.as_str(),
        cx.meaning.as_str(),
    ];
    join_non_empty(head.into_iter().chain(cx.usage_notes.iter().map(String::as_str)))
}

fn join_non_empty<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
