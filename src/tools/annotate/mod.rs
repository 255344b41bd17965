//! Annotation tools

mod annotate_sentence;
mod element_hue;

pub use annotate_sentence::AnnotateSentenceTool;
pub use element_hue::ElementHueTool;
