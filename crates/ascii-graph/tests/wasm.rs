//! Browser-side checks for the WebAssembly bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/ascii-graph`.

#![cfg(target_arch = "wasm32")]

use ascii_graph::wasm::{extract_graph, extract_graph_summary};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn extract_graph_returns_entries() {
    let json = extract_graph("a->b").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["node"]["text"], "a");
    assert_eq!(value[0]["neighbors"][0]["angle"], 90);
}

#[wasm_bindgen_test]
fn extract_graph_throws_on_dangling_line() {
    assert!(extract_graph("a-").is_err());
}

#[wasm_bindgen_test]
fn summary_reports_error_without_throwing() {
    let value: serde_json::Value = serde_json::from_str(&extract_graph_summary("a- ")).unwrap();
    assert_eq!(value["node_count"], 0);
    assert!(value["error"].is_string());

    let value: serde_json::Value = serde_json::from_str(&extract_graph_summary("a-b")).unwrap();
    assert_eq!(value["edge_count"], 2);
}
