//! WebAssembly bindings for ascii-graph
//!
//! Graphs cross the JS boundary as JSON strings: an array of
//! `{ node, neighbors }` entries in node order.

use wasm_bindgen::prelude::*;

use crate::core::{Database, GraphError};

/// Initialize WASM module
///
/// Sets up the panic hook and routes `tracing` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

fn to_js_error(error: GraphError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Extract the adjacency mapping of a diagram as JSON
///
/// Throws a JavaScript error carrying the parse error message on failure.
#[wasm_bindgen]
pub fn extract_graph(input: &str) -> Result<String, JsValue> {
    let database = crate::parse(input).map_err(to_js_error)?;
    serde_json::to_string(&database.entries()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a diagram and report counts or the error, never throwing
///
/// Returns JSON with fields `node_count`, `edge_count` and `error`.
#[wasm_bindgen]
pub fn extract_graph_summary(input: &str) -> String {
    match crate::parse(input) {
        Ok(database) => serde_json::json!({
            "node_count": database.node_count(),
            "edge_count": database.edge_count(),
            "error": null,
        }),
        Err(e) => serde_json::json!({
            "node_count": 0,
            "edge_count": 0,
            "error": e.to_string(),
        }),
    }
    .to_string()
}
