//! Example normalization

use crate::types::{Example, Provenance, SpanTag};

use super::raw::{non_empty, RawExample, RawSource};

const CORPUS_LABEL: &str = "Sourced by Wiki Corpus of Språkbanken Text";
const DEFAULT_LABEL: &str = "Sourced by Språkbanken Text";

fn provenance(source: Option<&RawSource>) -> Provenance {
    let Some(src) = source else {
        return Provenance {
            label: DEFAULT_LABEL.to_string(),
            ..Provenance::default()
        };
    };

    let has_corpus = src.corpus.as_deref().is_some_and(|c| !c.is_empty());
    let url = non_empty(src.text_url.clone())
        .or_else(|| non_empty(src.wikipedia_url.clone()))
        .or_else(|| non_empty(src.url.clone()))
        .unwrap_or_default();
    let title = non_empty(src.text_title.clone())
        .or_else(|| non_empty(src.title.clone()))
        .unwrap_or_default();

    Provenance {
        label: if has_corpus { CORPUS_LABEL } else { DEFAULT_LABEL }.to_string(),
        url,
        title,
    }
}

pub(crate) fn normalize_example(raw: &RawExample) -> Example {
    let span_tags = raw
        .fe_tags
        .iter()
        .map(|tag| SpanTag {
            element_id: tag.fe_id.clone().unwrap_or_default(),
            span_text: tag.span_sv.clone().unwrap_or_default(),
        })
        .collect();

    Example {
        sentence: raw.sv.clone().unwrap_or_default(),
        translation: raw.en.clone().unwrap_or_default(),
        provenance: provenance(raw.source.as_ref().or(raw.provenance.as_ref())),
        span_tags,
    }
}

pub(crate) fn normalize_examples(raw: &[RawExample]) -> Vec<Example> {
    raw.iter().map(normalize_example).collect()
}
