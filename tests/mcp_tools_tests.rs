//! Integration tests for the MCP tools over an in-memory transport

use std::io::Cursor;
use std::sync::Arc;

use serde_json::{json, Value};

use frame_lexicon::dictionary::Dictionary;
use frame_lexicon::normalize::{RawDataset, SourceDocument};
use frame_lexicon::protocol::ServerInfo;
use frame_lexicon::server::McpServer;
use frame_lexicon::tools::register_all_tools;
use frame_lexicon::element_hue;

fn dictionary() -> Arc<Dictionary> {
    let raw = RawDataset {
        frames: vec![SourceDocument::new(
            "frames/ingestion.json",
            json!({
                "frame": {
                    "id": "Ingestion",
                    "name_en": "Ingestion",
                    "elements": [
                        {"id": "Ingestor", "name": "Ingestor"},
                        {"id": "Ingestibles", "name": "Ingestibles"}
                    ]
                }
            }),
        )],
        lexical_units: vec![
            SourceDocument::new(
                "lus/ata.json",
                json!({"lexical_unit": {
                    "id": "äta",
                    "display_sv": "äta",
                    "english_equivalent_en": "eat",
                    "pos": "verb",
                    "linked_frames": ["Ingestion"]
                }}),
            ),
            SourceDocument::new(
                "lus/dricka.json",
                json!({"lexical_unit": {
                    "id": "dricka",
                    "display_sv": "dricka",
                    "english_equivalent_en": "drink",
                    "pos": "verb",
                    "linked_frames": ["Ingestion"]
                }}),
            ),
        ],
    };
    let dir = std::env::temp_dir().join("frame-lexicon-mcp-tests");
    Arc::new(Dictionary::from_raw(dir, &raw).unwrap())
}

/// Send `tools/call` requests and return the parsed responses
fn call(calls: &[(&str, Value)]) -> Vec<Value> {
    let input: String = calls
        .iter()
        .enumerate()
        .map(|(i, (name, args))| {
            json!({
                "jsonrpc": "2.0",
                "id": i,
                "method": "tools/call",
                "params": {"name": name, "arguments": args}
            })
            .to_string()
                + "\n"
        })
        .collect();

    let mut server = McpServer::with_io(
        ServerInfo::new("lexicon", "test"),
        Cursor::new(input.into_bytes()),
        Vec::new(),
    );
    register_all_tools(&mut server, dictionary());
    server.run().unwrap();

    String::from_utf8(server.into_writer())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Parse the JSON text payload of a tool result
fn payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[test]
fn test_all_tools_registered() {
    let mut server = McpServer::with_io(ServerInfo::default(), Cursor::new(Vec::new()), Vec::new());
    register_all_tools(&mut server, dictionary());
    assert_eq!(server.tool_count(), 10);
    assert!(server.tool_names().contains(&"annotate_sentence"));
}

#[test]
fn test_search_and_open() {
    let out = call(&[
        ("search_entries", json!({"query": "eat", "types": ["lu"]})),
        ("open_entry", json!({"key": "frame:Ingestion"})),
        ("open_entry", json!({"key": "lu:missing"})),
    ]);

    let results = payload(&out[0]);
    assert_eq!(results["groups"][0]["hits"][0]["key"], "lu:äta");

    let view = payload(&out[1]);
    assert_eq!(view["kind"], "frame");
    assert_eq!(view["lexicalUnits"].as_array().unwrap().len(), 2);

    assert_eq!(out[2]["error"]["code"], -32603);
    assert_eq!(out[2]["error"]["data"]["code"], "NOT_FOUND");
}

#[test]
fn test_exact_match_and_routes() {
    let out = call(&[
        ("exact_lexical_unit", json!({"query": "  DRINK "})),
        ("exact_lexical_unit", json!({"query": "dri"})),
        ("resolve_route", json!({"fragment": "#search:%C3%A4ta"})),
    ]);

    let exact = payload(&out[0]);
    assert_eq!(exact["lexicalUnit"]["id"], "dricka");
    assert_eq!(exact["route"], "#lu:dricka");

    let partial = payload(&out[1]);
    assert!(partial["lexicalUnit"].is_null());
    assert_eq!(partial["route"], "#search:dri");

    let route = payload(&out[2]);
    assert_eq!(route["route"]["kind"], "search");
    assert_eq!(route["route"]["value"], "äta");
}

#[test]
fn test_annotation_tools() {
    let out = call(&[
        (
            "annotate_sentence",
            json!({
                "sentence": "Han åt en smörgås",
                "tags": [
                    {"elementId": "Ingestor", "spanText": "Han"},
                    {"elementId": "Ingestibles", "spanText": "en smörgås"},
                    {"elementId": "Ingestibles", "spanText": "soppa"}
                ],
                "frameId": "Ingestion"
            }),
        ),
        ("element_hue", json!({"elementId": "Ingestor"})),
        ("element_hue", json!({})),
    ]);

    let annotated = payload(&out[0]);
    let kinds: Vec<&str> = annotated["segments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["tagged", "plain", "tagged"]);
    assert_eq!(annotated["dropped"], 1);

    assert_eq!(payload(&out[1])["hue"], element_hue("Ingestor"));
    assert_eq!(out[2]["error"]["data"]["code"], "BAD_REQUEST");
}

#[test]
fn test_browse_filters_and_stats() {
    let out = call(&[
        ("browse_entries", json!({"kind": "lu", "letter": "ä"})),
        ("browse_entries", json!({"kind": "verb"})),
        ("filter_options", json!({})),
        ("snapshot_stats", json!({})),
    ]);

    let page = payload(&out[0]);
    assert_eq!(page["letter"], "Ä");
    assert_eq!(page["entries"][0]["id"], "äta");

    assert_eq!(out[1]["error"]["data"]["code"], "BAD_REQUEST");

    let options = payload(&out[2]);
    assert_eq!(options["partsOfSpeech"], json!(["verb"]));

    let stats = payload(&out[3]);
    assert_eq!(stats["lexicalUnits"], 2);
    assert_eq!(stats["generation"], 1);
}
