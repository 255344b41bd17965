//! Reading a dataset directory into raw documents
//!
//! `<data>/manifest.json` lists frame and lexical unit files. Without a
//! manifest, `frames/*.json` and `lus/*.json` are discovered in path order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{LexiconError, LexiconResult};
use crate::normalize::{RawDataset, SourceDocument};

pub const MANIFEST_FILE: &str = "manifest.json";

const DATA_PREFIX: &str = "data/";
const FRAMES_DIR: &str = "frames";
const LEXICAL_UNITS_DIR: &str = "lus";

/// Manifest contents. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub frames: Vec<String>,
    #[serde(default)]
    pub lus: Vec<String>,
}

/// Normalize a manifest entry to a `data/`-prefixed relative path
pub fn normalize_manifest_path(path: &str) -> String {
    let mut s = path.trim();
    if let Some(rest) = s.strip_prefix("./") {
        s = rest;
    }
    if let Some(rest) = s.strip_prefix('/') {
        s = rest;
    }
    if s.starts_with(DATA_PREFIX) {
        s.to_string()
    } else {
        format!("{}{}", DATA_PREFIX, s)
    }
}

/// File a manifest entry points at, relative to the dataset directory
fn resolve_entry(data_dir: &Path, entry: &str) -> LexiconResult<PathBuf> {
    if entry.trim().is_empty() {
        return Err(LexiconError::InvalidManifest(
            "empty path in manifest".to_string(),
        ));
    }
    let normalized = normalize_manifest_path(entry);
    let relative = normalized.strip_prefix(DATA_PREFIX).unwrap_or(&normalized);
    Ok(data_dir.join(relative))
}

fn read_json(path: &Path) -> LexiconResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| LexiconError::json(path, e))
}

/// Read the manifest, or `None` when the dataset has none
pub fn read_manifest(data_dir: &Path) -> LexiconResult<Option<Manifest>> {
    let path = data_dir.join(MANIFEST_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(LexiconError::io(path, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| LexiconError::InvalidManifest(format!("{}: {}", path.display(), e)))
}

/// `*.json` files directly inside `dir`, sorted. A missing directory is empty.
fn discover(dir: &Path) -> LexiconResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LexiconError::io(dir, e)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| LexiconError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn origin_of(data_dir: &Path, path: &Path) -> String {
    path.strip_prefix(data_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn read_all(data_dir: &Path, paths: &[PathBuf]) -> LexiconResult<Vec<SourceDocument>> {
    paths
        .iter()
        .map(|path| {
            debug!(path = %path.display(), "Reading document");
            Ok(SourceDocument::new(origin_of(data_dir, path), read_json(path)?))
        })
        .collect()
}

/// Read every document of a dataset. Any unreadable or unparsable file
/// fails the whole load.
pub fn load_raw_dataset(data_dir: &Path) -> LexiconResult<RawDataset> {
    let (frame_paths, lu_paths) = match read_manifest(data_dir)? {
        Some(manifest) => {
            info!(
                frames = manifest.frames.len(),
                lexical_units = manifest.lus.len(),
                "Loading dataset from manifest"
            );
            (
                manifest
                    .frames
                    .iter()
                    .map(|p| resolve_entry(data_dir, p))
                    .collect::<LexiconResult<Vec<_>>>()?,
                manifest
                    .lus
                    .iter()
                    .map(|p| resolve_entry(data_dir, p))
                    .collect::<LexiconResult<Vec<_>>>()?,
            )
        }
        None => {
            let frames = discover(&data_dir.join(FRAMES_DIR))?;
            let lus = discover(&data_dir.join(LEXICAL_UNITS_DIR))?;
            info!(
                frames = frames.len(),
                lexical_units = lus.len(),
                dir = %data_dir.display(),
                "No manifest, discovered dataset files"
            );
            (frames, lus)
        }
    };

    Ok(RawDataset {
        frames: read_all(data_dir, &frame_paths)?,
        lexical_units: read_all(data_dir, &lu_paths)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_normalize_manifest_path() {
        assert_eq!(normalize_manifest_path("frames/a.json"), "data/frames/a.json");
        assert_eq!(normalize_manifest_path("./frames/a.json"), "data/frames/a.json");
        assert_eq!(normalize_manifest_path("/data/lus/b.json"), "data/lus/b.json");
        assert_eq!(normalize_manifest_path("  data/lus/b.json "), "data/lus/b.json");
    }

    #[test]
    fn test_manifest_order_is_kept() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "frames/b.json", r#"{"frame":{"id":"B"}}"#);
        write(dir.path(), "frames/a.json", r#"{"frame":{"id":"A"}}"#);
        write(
            dir.path(),
            MANIFEST_FILE,
            r#"{"frames":["data/frames/b.json","./frames/a.json"],"lus":[],"version":2}"#,
        );

        let raw = load_raw_dataset(dir.path()).unwrap();
        let origins: Vec<&str> = raw.frames.iter().map(|d| d.origin.as_str()).collect();
        assert_eq!(origins, vec!["frames/b.json", "frames/a.json"]);
        assert!(raw.lexical_units.is_empty());
    }

    #[test]
    fn test_discovery_without_manifest() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "lus/z.json", r#"{"lexical_unit":{"id":"z"}}"#);
        write(dir.path(), "lus/a.json", r#"{"lexical_unit":{"id":"a"}}"#);
        write(dir.path(), "lus/notes.txt", "ignored");

        let raw = load_raw_dataset(dir.path()).unwrap();
        assert!(raw.frames.is_empty());
        let origins: Vec<&str> = raw.lexical_units.iter().map(|d| d.origin.as_str()).collect();
        assert_eq!(origins, vec!["lus/a.json", "lus/z.json"]);
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_FILE, r#"{"frames":["frames/gone.json"]}"#);
        let err = load_raw_dataset(dir.path()).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_bad_manifest_and_bad_document() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_FILE, r#"{"frames": 3}"#);
        assert_eq!(load_raw_dataset(dir.path()).unwrap_err().code(), "INVALID_MANIFEST");

        write(dir.path(), MANIFEST_FILE, r#"{"frames":["frames/a.json"]}"#);
        write(dir.path(), "frames/a.json", "{ not json");
        assert_eq!(load_raw_dataset(dir.path()).unwrap_err().code(), "PARSE_ERROR");

        write(dir.path(), MANIFEST_FILE, r#"{"frames":[" "]}"#);
        assert_eq!(load_raw_dataset(dir.path()).unwrap_err().code(), "INVALID_MANIFEST");
    }
}
