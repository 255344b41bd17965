//! Span annotation of example sentences
//!
//! Places the span tags of an example onto its sentence as maximal
//! non-overlapping segments and colors each frame element with a hue
//! derived from its id alone.

mod hue;
mod spans;

pub use hue::{element_hue, hash32};
pub use spans::{annotate, annotate_with_report, AnnotationReport, Segment};

use serde::Serialize;

use crate::types::{Example, Frame, Provenance};

/// A legend line: which element a tagged span realizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    #[serde(rename = "elementId")]
    pub element_id: String,
    pub label: String,
    #[serde(rename = "spanText")]
    pub span_text: String,
    pub hue: u16,
}

/// An example ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedExample {
    pub sentence: String,
    pub translation: String,
    pub provenance: Provenance,
    pub segments: Vec<Segment>,
    pub legend: Vec<LegendEntry>,
    /// Tags that could not be placed on the sentence
    pub dropped: usize,
}

/// Annotate an example. Element labels come from `frame` when it defines
/// the element; otherwise the element id is shown.
pub fn annotate_example(example: &Example, frame: Option<&Frame>) -> AnnotatedExample {
    let report = annotate_with_report(&example.sentence, &example.span_tags);

    let legend = example
        .span_tags
        .iter()
        .filter(|t| !t.element_id.is_empty())
        .map(|t| LegendEntry {
            element_id: t.element_id.clone(),
            label: frame
                .map(|f| f.element_label(&t.element_id).to_string())
                .unwrap_or_else(|| t.element_id.clone()),
            span_text: t.span_text.clone(),
            hue: element_hue(&t.element_id),
        })
        .collect();

    AnnotatedExample {
        sentence: example.sentence.clone(),
        translation: example.translation.clone(),
        provenance: example.provenance.clone(),
        segments: report.segments,
        legend,
        dropped: report.dropped.len(),
    }
}
