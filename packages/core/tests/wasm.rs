//! Tests for the JavaScript-facing surface.
//!
//! Run with: wasm-pack test --node packages/core

#![cfg(target_arch = "wasm32")]

use serde::Serialize;
use stringalg_core::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_overlap: Option<bool>,
}

fn options(options: Options) -> JsValue {
    serde_wasm_bindgen::to_value(&options).unwrap()
}

#[wasm_bindgen_test]
fn search_with_default_config() {
    let hits = search(b"aaaaa", b"aa", JsValue::UNDEFINED).unwrap();
    assert_eq!(hits, vec![0, 1, 2, 3]);
}

#[wasm_bindgen_test]
fn search_with_js_config() {
    let config = options(Options {
        algorithm: Some("suffix_array"),
        allow_overlap: Some(false),
    });
    let hits = search(b"aaaaa", b"aa", config).unwrap();
    assert_eq!(hits, vec![0, 2]);
}

#[wasm_bindgen_test]
fn search_rejects_unknown_algorithm() {
    let config = options(Options {
        algorithm: Some("grep"),
        ..Default::default()
    });
    assert!(search(b"abc", b"b", config).is_err());
}

#[wasm_bindgen_test]
fn lcp_array_rejects_mismatched_suffix_array() {
    let sa = build_suffix_array(b"banana").unwrap();
    assert!(lcp_array(b"bananas", &sa).is_err());
    assert_eq!(lcp_array(b"banana", &sa).unwrap(), vec![1, 3, 0, 0, 2, 0]);
}

#[wasm_bindgen_test]
fn find_repeats_returns_array() {
    let repeats = find_repeats(b"banana", JsValue::NULL).unwrap();
    let decoded: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(repeats).unwrap();
    // "ana" and "na"
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0]["length"].as_f64(), Some(3.0));
}

#[wasm_bindgen_test]
fn suffix_index_class() {
    let index = SuffixIndex::new(b"abracadabra");
    assert_eq!(index.find_all_js(b"abra").unwrap(), vec![0, 7]);
    assert_eq!(index.count(b"a"), 5);
    assert!(index.contains(b"cad"));
}
