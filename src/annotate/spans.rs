//! Greedy non-overlapping span placement

use std::cmp::Reverse;

use serde::Serialize;

use crate::types::SpanTag;

use super::hue::element_hue;

/// A piece of an annotated sentence. Offsets are byte offsets into the
/// sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Plain {
        text: String,
    },
    Tagged {
        text: String,
        #[serde(rename = "elementId")]
        element_id: String,
        hue: u16,
        start: usize,
        end: usize,
    },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Tagged { text, .. } => text,
        }
    }

    pub fn element_id(&self) -> Option<&str> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Tagged { element_id, .. } => Some(element_id.as_str()),
        }
    }
}

/// Segments plus the tags that could not be placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    pub segments: Vec<Segment>,
    /// Empty tags and tags with no free occurrence, in input order
    pub dropped: Vec<SpanTag>,
}

#[derive(Debug, Clone, Copy)]
struct Placed<'a> {
    start: usize,
    end: usize,
    element_id: &'a str,
}

fn overlaps(placed: &[Placed<'_>], start: usize, end: usize) -> bool {
    placed.iter().any(|r| !(end <= r.start || start >= r.end))
}

/// Byte offset of the character after the one starting at `index`
fn next_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len(), |c| index + c.len_utf8())
}

/// Split a sentence into plain and tagged segments
pub fn annotate(sentence: &str, tags: &[SpanTag]) -> Vec<Segment> {
    annotate_with_report(sentence, tags).segments
}

/// Place tags longest first, each at its leftmost occurrence that does not
/// overlap an already placed tag. Tags with no such occurrence are dropped.
pub fn annotate_with_report(sentence: &str, tags: &[SpanTag]) -> AnnotationReport {
    let mut candidates: Vec<(usize, &SpanTag)> = tags
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.span_text.is_empty() && !t.element_id.is_empty())
        .collect();
    // Longest first by UTF-16 length; stable, so equal lengths keep input order
    candidates.sort_by_cached_key(|(_, t)| Reverse(t.span_text.encode_utf16().count()));

    let mut placed: Vec<Placed<'_>> = Vec::new();
    let mut accepted = vec![false; tags.len()];

    for (index, tag) in candidates {
        let span = tag.span_text.as_str();
        let mut from = 0;
        while from <= sentence.len() {
            let Some(offset) = sentence[from..].find(span) else {
                break;
            };
            let start = from + offset;
            let end = start + span.len();
            if !overlaps(&placed, start, end) {
                placed.push(Placed {
                    start,
                    end,
                    element_id: &tag.element_id,
                });
                accepted[index] = true;
                break;
            }
            from = next_boundary(sentence, start);
        }
    }

    let dropped = tags
        .iter()
        .zip(&accepted)
        .filter(|(_, ok)| !**ok)
        .map(|(t, _)| t.clone())
        .collect();

    if placed.is_empty() {
        return AnnotationReport {
            segments: vec![Segment::Plain {
                text: sentence.to_string(),
            }],
            dropped,
        };
    }

    placed.sort_by_key(|r| r.start);

    let mut segments = Vec::with_capacity(placed.len() * 2 + 1);
    let mut pos = 0;
    for r in &placed {
        if r.start > pos {
            segments.push(Segment::Plain {
                text: sentence[pos..r.start].to_string(),
            });
        }
        segments.push(Segment::Tagged {
            text: sentence[r.start..r.end].to_string(),
            element_id: r.element_id.to_string(),
            hue: element_hue(r.element_id),
            start: r.start,
            end: r.end,
        });
        pos = r.end;
    }
    if pos < sentence.len() {
        segments.push(Segment::Plain {
            text: sentence[pos..].to_string(),
        });
    }

    AnnotationReport { segments, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<(&str, Option<&str>)> {
        segments.iter().map(|s| (s.text(), s.element_id())).collect()
    }

    #[test]
    fn test_contained_span_yields_to_longer() {
        let tags = vec![SpanTag::new("A", "dog"), SpanTag::new("B", "the big dog")];
        let report = annotate_with_report("the big dog ran", &tags);
        assert_eq!(
            texts(&report.segments),
            vec![("the big dog", Some("B")), (" ran", None)]
        );
        assert_eq!(report.dropped, vec![SpanTag::new("A", "dog")]);
    }

    #[test]
    fn test_contained_span_inside_sentence() {
        let tags = vec![
            SpanTag::new("Animal", "big dog"),
            SpanTag::new("SubAnimal", "dog"),
        ];
        let report = annotate_with_report("the big dog ran", &tags);
        assert_eq!(
            texts(&report.segments),
            vec![("the ", None), ("big dog", Some("Animal")), (" ran", None)]
        );
        assert_eq!(report.dropped, vec![SpanTag::new("SubAnimal", "dog")]);
    }

    #[test]
    fn test_astral_characters_count_as_two_units() {
        // "🐕🐕🐕" is 6 UTF-16 units and outranks "abc🐕" at 5
        let tags = vec![SpanTag::new("Abc", "abc🐕"), SpanTag::new("Dogs", "🐕🐕🐕")];
        let report = annotate_with_report("abc🐕🐕🐕", &tags);
        assert_eq!(
            texts(&report.segments),
            vec![("abc", None), ("🐕🐕🐕", Some("Dogs"))]
        );
        assert_eq!(report.dropped, vec![SpanTag::new("Abc", "abc🐕")]);
    }

    #[test]
    fn test_no_match_is_single_plain_segment() {
        let segments = annotate("hej", &[SpanTag::new("A", "xyz")]);
        assert_eq!(segments, vec![Segment::Plain { text: "hej".to_string() }]);
    }

    #[test]
    fn test_later_occurrence_used_when_first_overlaps() {
        let tags = vec![SpanTag::new("A", "han och han"), SpanTag::new("B", "han")];
        let segments = annotate("han och han såg han", &tags);
        assert_eq!(
            texts(&segments),
            vec![
                ("han och han", Some("A")),
                (" såg ", None),
                ("han", Some("B")),
            ]
        );
    }

    #[test]
    fn test_segments_do_not_overlap_and_cover_sentence() {
        let sentence = "Hon sprang snabbt hem till huset";
        let tags = vec![
            SpanTag::new("Self_mover", "Hon"),
            SpanTag::new("Goal", "hem till huset"),
            SpanTag::new("Manner", "snabbt"),
            SpanTag::new("Goal", "huset"),
        ];
        let segments = annotate(sentence, &tags);

        let rebuilt: String = segments.iter().map(Segment::text).collect();
        assert_eq!(rebuilt, sentence);

        let mut last_end = 0;
        for seg in &segments {
            if let Segment::Tagged { start, end, text, .. } = seg {
                assert!(*start >= last_end);
                assert_eq!(&sentence[*start..*end], text);
                last_end = *end;
            }
        }
    }

    #[test]
    fn test_byte_offsets_with_multibyte_text() {
        let segments = annotate("Åsa åt äpplet", &[SpanTag::new("Food", "äpplet")]);
        match &segments[1] {
            Segment::Tagged { start, end, .. } => {
                assert_eq!(*start, "Åsa åt ".len());
                assert_eq!(*end, "Åsa åt äpplet".len());
            }
            other => panic!("expected tagged segment, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_tags_are_dropped() {
        let tags = vec![SpanTag::new("", "hej"), SpanTag::new("A", "")];
        let report = annotate_with_report("hej", &tags);
        assert_eq!(report.segments.len(), 1);
        assert_eq!(report.dropped.len(), 2);
    }
}
