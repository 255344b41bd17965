//! Administrative tools

mod reload_snapshot;
mod snapshot_stats;

pub use reload_snapshot::ReloadSnapshotTool;
pub use snapshot_stats::SnapshotStatsTool;
