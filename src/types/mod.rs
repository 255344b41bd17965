//! Data types for the lexicon
//!
//! Canonical, normalized records for the three entry kinds and the
//! examples embedded in them.

mod construction;
mod example;
mod frame;
mod item;
mod kind;
mod lexical_unit;

pub use construction::{Construction, CONSTRUCTION_ID_SEPARATOR};
pub use example::{Example, Provenance, SpanTag};
pub use frame::{ElementMention, Frame, FrameElement};
pub use item::{Entity, Item};
pub use kind::EntityKind;
pub use lexical_unit::{
    form_label, CommonError, FormRow, FormTable, FormValue, LexicalUnit, Morphology,
    MorphologyBlock, OrderedEntries, Pronunciation, Sense, UsagePattern,
};
