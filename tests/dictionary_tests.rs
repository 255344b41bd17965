//! Integration tests for dataset loading, reload and snapshot queries

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use serde_json::json;
use tempfile::TempDir;

use frame_lexicon::dictionary::{Dictionary, EntryView, SearchRequest};
use frame_lexicon::search::SortMode;
use frame_lexicon::{Config, EntityKind, Route};

fn write_json(dir: &Path, rel: &str, value: serde_json::Value) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

fn setup_dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_json(
        root,
        "frames/self_motion.json",
        json!({
            "frame": {
                "id": "Self_motion",
                "name_en": "Self motion",
                "frame_description_en": "A living being moves under its own power.",
                "elements": [
                    {"id": "Self_mover", "name": "Self mover"},
                    {"id": "Goal", "name": "Goal"}
                ],
                "examples": [{
                    "sv": "Hon sprang hem.",
                    "en": "She ran home.",
                    "fe_tags": [
                        {"fe_id": "Self_mover", "span_sv": "Hon"},
                        {"fe_id": "Goal", "span_sv": "hem"}
                    ]
                }]
            },
            "constructions": [
                {"cxn_id": "goal_adverb", "name_user": "Going home", "pattern": "V + hem"},
                {"name_user": "no id"}
            ]
        }),
    );
    write_json(
        root,
        "frames/motion.json",
        json!({"frame": {"id": "Motion", "name_en": "Motion"}}),
    );
    write_json(
        root,
        "lus/springa.json",
        json!({"lexical_unit": {
            "id": "springa",
            "display_sv": "springa",
            "english_equivalent_en": "run",
            "pos": "verb",
            "linked_frames": [{"frame_id": "Self_motion"}, {"frame_id": "F_GHOST"}],
            "senses": [{"meaning_en": "move fast on foot"}]
        }}),
    );
    write_json(
        root,
        "lus/aka.json",
        json!({"lexical_unit": {
            "id": "åka",
            "display_sv": "åka",
            "english_equivalent_en": "ride",
            "pos": "verb",
            "linked_frames": ["Motion"]
        }}),
    );
    write_json(
        root,
        "manifest.json",
        json!({
            "frames": ["frames/self_motion.json", "frames/motion.json"],
            "lus": ["lus/springa.json", "lus/aka.json"]
        }),
    );
    dir
}

fn open(dir: &TempDir) -> Dictionary {
    Dictionary::open(&Config::with_data_dir(dir.path())).unwrap()
}

#[test]
fn test_open_counts_and_diagnostics() {
    let dir = setup_dataset();
    let stats = open(&dir).stats();

    assert_eq!(stats.frames, 2);
    assert_eq!(stats.lexical_units, 2);
    assert_eq!(stats.constructions, 1);
    assert_eq!(stats.items, 5);
    assert_eq!(stats.generation, 1);
    assert_eq!(stats.diagnostics.normalize.skipped_constructions, 1);

    let dangling = &stats.diagnostics.index.dangling;
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].source, "lu:springa");
    assert_eq!(dangling[0].missing_frame_id, "F_GHOST");
}

#[test]
fn test_dangling_frame_has_no_entry() {
    let dir = setup_dataset();
    let snapshot = open(&dir).snapshot();

    assert!(snapshot.entry("frame:F_GHOST").is_err());
    assert!(snapshot.indexes().lexical_units_of_frame("F_GHOST").is_empty());
    assert_eq!(
        snapshot.resolve(&Route::Frame("F_GHOST".to_string())),
        Route::Home
    );

    match snapshot.entry("lu:springa").unwrap() {
        EntryView::LexicalUnit { frames, .. } => {
            let ids: Vec<&str> = frames.iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["Self_motion"]);
        }
        other => panic!("expected a lexical unit view, got {:?}", other.kind()),
    }
}

#[test]
fn test_search_ranks_exact_id_first() {
    let dir = setup_dataset();
    let snapshot = open(&dir).snapshot();

    let mut request = SearchRequest::new("Motion");
    request.types = [EntityKind::Frame].into_iter().collect();
    let results = snapshot.search(&request);

    let keys: Vec<&str> = results.hits().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, vec!["frame:Motion", "frame:Self_motion"]);
    assert!(results.hits().all(|h| h.score > 0));
}

#[test]
fn test_alphabetical_sort_uses_swedish_order() {
    let dir = setup_dataset();
    let snapshot = open(&dir).snapshot();

    let mut request = SearchRequest::new("");
    request.types = [EntityKind::LexicalUnit].into_iter().collect();
    request.sort = SortMode::Az;
    let titles: Vec<String> = snapshot
        .search(&request)
        .hits()
        .map(|h| h.title.clone())
        .collect();
    // å sorts after z
    assert_eq!(titles, vec!["springa", "åka"]);
}

#[test]
fn test_frame_examples_are_annotated() {
    let dir = setup_dataset();
    let snapshot = open(&dir).snapshot();

    match snapshot.entry("frame:Self_motion").unwrap() {
        EntryView::Frame { examples, constructions, .. } => {
            let labels: Vec<&str> = examples[0].legend.iter().map(|l| l.label.as_str()).collect();
            assert_eq!(labels, vec!["Self mover", "Goal"]);
            assert_eq!(examples[0].segments.len(), 4);
            assert_eq!(constructions[0].id, "Self_motion::goal_adverb");
        }
        other => panic!("expected a frame view, got {:?}", other.kind()),
    }
}

#[test]
fn test_discovery_without_manifest() {
    let dir = setup_dataset();
    fs::remove_file(dir.path().join("manifest.json")).unwrap();

    let stats = open(&dir).stats();
    assert_eq!(stats.frames, 2);
    assert_eq!(stats.lexical_units, 2);
}

#[test]
fn test_missing_identifier_aborts_load() {
    let dir = setup_dataset();
    write_json(
        dir.path(),
        "lus/aka.json",
        json!({"lexical_unit": {"display_sv": "åka"}}),
    );

    let err = Dictionary::open(&Config::with_data_dir(dir.path())).err().unwrap();
    assert_eq!(err.code(), "MISSING_IDENTIFIER");
}

#[test]
fn test_reload_swaps_snapshot() {
    let dir = setup_dataset();
    let dictionary = open(&dir);
    let before = dictionary.snapshot();

    write_json(
        dir.path(),
        "lus/ga.json",
        json!({"lexical_unit": {"id": "gå", "display_sv": "gå", "linked_frames": ["Motion"]}}),
    );
    write_json(
        dir.path(),
        "manifest.json",
        json!({
            "frames": ["frames/self_motion.json", "frames/motion.json"],
            "lus": ["lus/springa.json", "lus/aka.json", "lus/ga.json"]
        }),
    );

    let after = dictionary.reload().unwrap();
    assert_eq!(after.generation(), 2);
    assert_eq!(after.stats().lexical_units, 3);
    assert_eq!(dictionary.snapshot().generation(), 2);

    // Readers holding the old snapshot keep a consistent view
    assert_eq!(before.stats().lexical_units, 2);
    assert_eq!(before.generation(), 1);
}

#[test]
fn test_failed_reload_keeps_current_snapshot() {
    let dir = setup_dataset();
    let dictionary = open(&dir);

    fs::write(dir.path().join("frames/motion.json"), "{ broken").unwrap();
    let err = dictionary.reload().unwrap_err();
    assert_eq!(err.code(), "PARSE_ERROR");

    let snapshot = dictionary.snapshot();
    assert_eq!(snapshot.generation(), 1);
    assert_eq!(snapshot.stats().frames, 2);
}

#[test]
fn test_concurrent_readers_during_reload() {
    let dir = setup_dataset();
    let dictionary = Arc::new(open(&dir));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let dictionary = Arc::clone(&dictionary);
            thread::spawn(move || {
                for _ in 0..50 {
                    let snapshot = dictionary.snapshot();
                    let results = snapshot.search(&SearchRequest::new("springa"));
                    assert_eq!(results.hits().next().unwrap().key, "lu:springa");
                }
            })
        })
        .collect();

    for _ in 0..3 {
        dictionary.reload().unwrap();
    }
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(dictionary.snapshot().generation(), 4);
}
