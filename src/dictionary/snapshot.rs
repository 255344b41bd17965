//! An immutable, fully indexed dataset and the queries it answers

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::annotate::{annotate_example, AnnotatedExample};
use crate::error::{LexiconError, LexiconResult};
use crate::index::{build_indexes, IndexDiagnostics, Indexes};
use crate::normalize::{Dataset, NormalizeDiagnostics};
use crate::route::Route;
use crate::search::{
    self, collation, sort_rows, AdvancedFilters, BrowseEntry, BrowsePage, EnabledTypes,
    ScoringPolicy, SearchRow, SortMode,
};
use crate::types::{
    Construction, EntityKind, Example, FormTable, Frame, Item, LexicalUnit, Sense, SpanTag,
};

/// Hits shown per kind in a grouped result list
pub const DEFAULT_GROUP_LIMIT: usize = 120;

/// Per-kind limit for a full search page
pub const SEARCH_PAGE_GROUP_LIMIT: usize = 260;

/// Everything dropped or left unresolved while building a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadDiagnostics {
    #[serde(flatten)]
    pub normalize: NormalizeDiagnostics,
    #[serde(flatten)]
    pub index: IndexDiagnostics,
}

/// A search as issued by a client. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub types: EnabledTypes,
    #[serde(default)]
    pub filters: AdvancedFilters,
    #[serde(default)]
    pub sort: SortMode,
    /// Hits per kind; `DEFAULT_GROUP_LIMIT` when absent
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub key: String,
    pub kind: EntityKind,
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub meta: String,
    pub score: u32,
}

impl From<&SearchRow> for SearchHit {
    fn from(row: &SearchRow) -> Self {
        Self {
            key: row.item.key(),
            kind: row.item.kind(),
            id: row.item.id().to_string(),
            title: row.item.title().to_string(),
            meta: row.item.meta(),
            score: row.score,
        }
    }
}

/// Hits of one kind, in result order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    pub kind: EntityKind,
    pub label: &'static str,
    /// Matches of this kind before the per-kind limit
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub sort: SortMode,
    pub total: usize,
    /// Non-empty groups: lexical units, constructions, frames
    pub groups: Vec<ResultGroup>,
}

impl SearchResults {
    pub fn hits(&self) -> impl Iterator<Item = &SearchHit> {
        self.groups.iter().flat_map(|g| g.hits.iter())
    }
}

/// One sense of a lexical unit with its examples annotated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenseView {
    pub title: String,
    #[serde(flatten)]
    pub sense: Sense,
    #[serde(rename = "annotatedExamples")]
    pub annotated_examples: Vec<AnnotatedExample>,
}

/// An entry with its related entries resolved
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum EntryView {
    #[serde(rename = "frame")]
    Frame {
        frame: Arc<Frame>,
        #[serde(rename = "lexicalUnits")]
        lexical_units: Vec<BrowseEntry>,
        constructions: Vec<BrowseEntry>,
        /// Confusable frames present in the snapshot
        confusable: Vec<BrowseEntry>,
        examples: Vec<AnnotatedExample>,
    },
    #[serde(rename = "lu")]
    LexicalUnit {
        #[serde(rename = "lexicalUnit")]
        lexical_unit: Arc<LexicalUnit>,
        #[serde(rename = "primaryFrame")]
        primary_frame: Option<BrowseEntry>,
        frames: Vec<BrowseEntry>,
        forms: Option<FormTable>,
        senses: Vec<SenseView>,
    },
    #[serde(rename = "construction")]
    Construction {
        construction: Arc<Construction>,
        frames: Vec<BrowseEntry>,
        examples: Vec<AnnotatedExample>,
    },
}

impl EntryView {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntryView::Frame { .. } => EntityKind::Frame,
            EntryView::LexicalUnit { .. } => EntityKind::LexicalUnit,
            EntryView::Construction { .. } => EntityKind::Construction,
        }
    }
}

/// A frame choice for the advanced frame filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameOption {
    pub id: String,
    pub name: String,
    /// `name (id)`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    #[serde(rename = "partsOfSpeech")]
    pub parts_of_speech: Vec<String>,
    pub frames: Vec<FrameOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    pub frames: usize,
    #[serde(rename = "lexicalUnits")]
    pub lexical_units: usize,
    pub constructions: usize,
    pub items: usize,
    pub generation: u64,
    #[serde(rename = "loadedAt")]
    pub loaded_at: String,
    #[serde(rename = "scoringPolicy")]
    pub scoring_policy: String,
    pub diagnostics: LoadDiagnostics,
}

/// An immutable view of one loaded dataset
#[derive(Debug, Clone)]
pub struct Snapshot {
    indexes: Indexes,
    generation: u64,
    loaded_at: DateTime<Utc>,
    normalize_diagnostics: NormalizeDiagnostics,
    policy: ScoringPolicy,
}

impl Snapshot {
    /// Index a normalized dataset
    pub fn build(dataset: Dataset, generation: u64) -> Self {
        let Dataset {
            frames,
            lexical_units,
            constructions,
            diagnostics,
        } = dataset;

        Self {
            indexes: build_indexes(frames, lexical_units, constructions),
            generation,
            loaded_at: Utc::now(),
            normalize_diagnostics: diagnostics,
            policy: ScoringPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn indexes(&self) -> &Indexes {
        &self.indexes
    }

    pub fn items(&self) -> &[Item] {
        &self.indexes.items
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn diagnostics(&self) -> LoadDiagnostics {
        LoadDiagnostics {
            normalize: self.normalize_diagnostics.clone(),
            index: self.indexes.diagnostics.clone(),
        }
    }

    /// Scored and sorted rows, ungrouped and unlimited
    pub fn search_rows(&self, request: &SearchRequest) -> Vec<SearchRow> {
        let mut rows = search::search_with_policy(
            &request.query,
            &request.types,
            &request.filters,
            self.items(),
            &self.policy,
        );
        sort_rows(&mut rows, request.sort);
        rows
    }

    /// Run a search and group the hits by kind
    pub fn search(&self, request: &SearchRequest) -> SearchResults {
        let rows = self.search_rows(request);
        let limit = request.limit.unwrap_or(DEFAULT_GROUP_LIMIT);

        let groups = EntityKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let of_kind: Vec<&SearchRow> =
                    rows.iter().filter(|r| r.item.kind() == kind).collect();
                if of_kind.is_empty() {
                    return None;
                }
                Some(ResultGroup {
                    kind,
                    label: kind.label(),
                    total: of_kind.len(),
                    hits: of_kind.into_iter().take(limit).map(SearchHit::from).collect(),
                })
            })
            .collect();

        SearchResults {
            query: request.query.trim().to_string(),
            sort: request.sort,
            total: rows.len(),
            groups,
        }
    }

    pub fn exact_lexical_unit(&self, query: &str) -> Option<Arc<LexicalUnit>> {
        search::exact_lexical_unit(query, self.items())
    }

    /// Where a submitted query leads: straight to a unique exact lexical
    /// unit, otherwise to the search page
    pub fn submit(&self, query: &str) -> Route {
        match self.exact_lexical_unit(query) {
            Some(lu) => Route::LexicalUnit(lu.id.clone()),
            None => Route::Search(query.trim().to_string()),
        }
    }

    pub fn browse(&self, kind: EntityKind, letter: &str, limit: usize) -> BrowsePage {
        search::browse(kind, letter, limit, self.items())
    }

    /// Distinct non-empty parts of speech, sorted
    pub fn part_of_speech_values(&self) -> Vec<String> {
        self.items()
            .iter()
            .filter_map(Item::as_lexical_unit)
            .map(|lu| lu.pos.trim())
            .filter(|pos| !pos.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Frames ordered by name
    pub fn frame_options(&self) -> Vec<FrameOption> {
        let mut frames: Vec<&Arc<Frame>> = self.items().iter().filter_map(Item::as_frame).collect();
        frames.sort_by(|a, b| collation::compare(a.title(), b.title()));
        frames
            .into_iter()
            .map(|f| FrameOption {
                id: f.id.clone(),
                name: f.title().to_string(),
                label: format!("{} ({})", f.title(), f.id),
            })
            .collect()
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            parts_of_speech: self.part_of_speech_values(),
            frames: self.frame_options(),
        }
    }

    /// Resolve a route against this snapshot. Entry routes naming unknown
    /// ids resolve home.
    pub fn resolve(&self, route: &Route) -> Route {
        match route.entry() {
            Some((kind, id)) if self.indexes.item(kind, id).is_none() => Route::Home,
            _ => route.clone(),
        }
    }

    fn summary(&self, kind: EntityKind, id: &str) -> Option<BrowseEntry> {
        self.indexes.item(kind, id).as_ref().map(BrowseEntry::from)
    }

    fn frame_summaries<'a>(&self, ids: impl IntoIterator<Item = &'a String>) -> Vec<BrowseEntry> {
        ids.into_iter()
            .filter_map(|id| self.summary(EntityKind::Frame, id))
            .collect()
    }

    fn annotate_all(examples: &[Example], frame: Option<&Frame>) -> Vec<AnnotatedExample> {
        examples.iter().map(|ex| annotate_example(ex, frame)).collect()
    }

    /// Open an entry by its composite key, e.g. `frame:Motion`
    pub fn entry(&self, key: &str) -> LexiconResult<EntryView> {
        let item = self
            .indexes
            .item_by_key(key.trim())
            .ok_or_else(|| LexiconError::UnknownEntity(key.trim().to_string()))?;

        let view = match item {
            Item::Frame(frame) => EntryView::Frame {
                lexical_units: self
                    .indexes
                    .lexical_units_of_frame(&frame.id)
                    .into_iter()
                    .map(|lu| BrowseEntry::from(&Item::LexicalUnit(lu)))
                    .collect(),
                constructions: self
                    .indexes
                    .constructions_of_frame(&frame.id)
                    .into_iter()
                    .map(|cx| BrowseEntry::from(&Item::Construction(cx)))
                    .collect(),
                confusable: self.frame_summaries(&frame.confusable_with),
                examples: Self::annotate_all(&frame.examples, Some(&*frame)),
                frame,
            },
            Item::LexicalUnit(lu) => {
                let primary = lu.primary_frame_id().and_then(|id| self.indexes.frame(id));
                let senses = lu
                    .senses
                    .iter()
                    .enumerate()
                    .map(|(i, sense)| SenseView {
                        title: if sense.meaning.is_empty() {
                            format!("Meaning {}", i + 1)
                        } else {
                            sense.meaning.clone()
                        },
                        annotated_examples: Self::annotate_all(
                            &sense.examples,
                            primary.map(|f| &**f),
                        ),
                        sense: sense.clone(),
                    })
                    .collect();
                EntryView::LexicalUnit {
                    primary_frame: primary.map(|f| BrowseEntry::from(&Item::Frame(Arc::clone(f)))),
                    frames: self.frame_summaries(&lu.linked_frames),
                    forms: lu.forms_for_pos(),
                    senses,
                    lexical_unit: lu,
                }
            }
            Item::Construction(cx) => {
                let primary = cx.primary_frame_id().and_then(|id| self.indexes.frame(id));
                EntryView::Construction {
                    frames: self.frame_summaries(&cx.frames),
                    examples: Self::annotate_all(&cx.examples, primary.map(|f| &**f)),
                    construction: cx,
                }
            }
        };
        Ok(view)
    }

    /// Annotate an ad-hoc sentence, labelling elements from `frame_id`
    /// when that frame exists
    pub fn annotate_sentence(
        &self,
        sentence: &str,
        tags: Vec<SpanTag>,
        frame_id: Option<&str>,
    ) -> AnnotatedExample {
        let frame = frame_id.and_then(|id| self.indexes.frame(id));
        annotate_example(&Example::new(sentence, tags), frame.map(|f| &**f))
    }

    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            frames: self.indexes.frame_count(),
            lexical_units: self.indexes.lexical_unit_count(),
            constructions: self.indexes.construction_count(),
            items: self.indexes.items.len(),
            generation: self.generation,
            loaded_at: self.loaded_at.to_rfc3339(),
            scoring_policy: self.policy.version.clone(),
            diagnostics: self.diagnostics(),
        }
    }
}
