//! Dictionary - the loaded dataset behind every surface
//!
//! Holds the current [`Snapshot`] behind a read-write lock. Readers clone
//! the `Arc` and release the lock at once; a reload builds the next
//! snapshot outside the lock and swaps it in. A failed reload leaves the
//! current snapshot serving.

mod loader;
mod snapshot;

pub use loader::{load_raw_dataset, normalize_manifest_path, read_manifest, Manifest, MANIFEST_FILE};
pub use snapshot::{
    EntryView, FilterOptions, FrameOption, LoadDiagnostics, ResultGroup, SearchHit, SearchRequest,
    SearchResults, SenseView, Snapshot, SnapshotStats, DEFAULT_GROUP_LIMIT,
    SEARCH_PAGE_GROUP_LIMIT,
};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::LexiconResult;
use crate::normalize::{Dataset, RawDataset};

pub struct Dictionary {
    data_dir: PathBuf,
    snapshot: RwLock<Arc<Snapshot>>,
    generation: AtomicU64,
}

impl Dictionary {
    /// Load the dataset named by the configuration
    pub fn open(config: &Config) -> LexiconResult<Self> {
        let snapshot = load_snapshot(&config.data_dir, 1)?;
        Ok(Self {
            data_dir: config.data_dir.clone(),
            snapshot: RwLock::new(Arc::new(snapshot)),
            generation: AtomicU64::new(1),
        })
    }

    /// Build a dictionary from documents already in memory. Reloads read
    /// from `data_dir`.
    pub fn from_raw(data_dir: impl Into<PathBuf>, raw: &RawDataset) -> LexiconResult<Self> {
        let snapshot = build_snapshot(raw, 1)?;
        Ok(Self {
            data_dir: data_dir.into(),
            snapshot: RwLock::new(Arc::new(snapshot)),
            generation: AtomicU64::new(1),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The current snapshot. Stays valid across later reloads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read())
    }

    /// Re-read the dataset and swap in the new snapshot.
    /// On error the current snapshot is kept.
    pub fn reload(&self) -> LexiconResult<Arc<Snapshot>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let next = match load_snapshot(&self.data_dir, generation) {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                warn!(error = %e, "Reload failed, keeping current snapshot");
                return Err(e);
            }
        };

        let mut current = self.snapshot.write();
        // Concurrent reloads: never replace a newer snapshot
        if current.generation() < generation {
            *current = Arc::clone(&next);
        }
        drop(current);

        info!(generation, "Snapshot reloaded");
        Ok(next)
    }

    pub fn stats(&self) -> SnapshotStats {
        self.snapshot().stats()
    }
}

fn load_snapshot(data_dir: &Path, generation: u64) -> LexiconResult<Snapshot> {
    let raw = load_raw_dataset(data_dir)?;
    build_snapshot(&raw, generation)
}

fn build_snapshot(raw: &RawDataset, generation: u64) -> LexiconResult<Snapshot> {
    let dataset = Dataset::from_raw(raw)?;
    let snapshot = Snapshot::build(dataset, generation);

    let diagnostics = snapshot.diagnostics();
    if diagnostics.normalize.skipped_constructions > 0 {
        warn!(
            count = diagnostics.normalize.skipped_constructions,
            "Skipped construction entries without an id"
        );
    }
    if !diagnostics.index.dangling.is_empty() {
        warn!(
            count = diagnostics.index.dangling.len(),
            "Frame references to unknown frames"
        );
    }
    if !diagnostics.index.duplicate_keys.is_empty() {
        warn!(
            count = diagnostics.index.duplicate_keys.len(),
            "Duplicate entry ids, last document wins"
        );
    }

    let indexes = snapshot.indexes();
    debug!(
        frames_with_units = indexes.frame_to_lexical_units.len(),
        unit_links = indexes.frame_to_lexical_units.value_count(),
        frames_with_constructions = indexes.frame_to_constructions.len(),
        construction_links = indexes.frame_to_constructions.value_count(),
        "Relation indexes built"
    );

    let stats = snapshot.stats();
    info!(
        generation,
        frames = stats.frames,
        lexical_units = stats.lexical_units,
        constructions = stats.constructions,
        "Snapshot built"
    );
    Ok(snapshot)
}
