//! Stringalg Core - exact string matching and suffix array indexing
//!
//! This is the WebAssembly core for the stringalg toolkit. It provides exact
//! pattern search over byte sequences with three interchangeable algorithms
//! (Knuth-Morris-Pratt, Rabin-Karp and suffix array binary search) plus suffix
//! array and LCP construction for repeat analysis.
//!
//! # Example (from Rust)
//!
//! ```
//! use stringalg_core::{kmp, lcp, query, rabin_karp, suffix_array};
//!
//! assert_eq!(kmp::search(b"ababcabcabababd", b"ababd"), vec![10]);
//! assert_eq!(rabin_karp::search(b"abracadabra", b"abra"), vec![0, 7]);
//!
//! let sa = suffix_array::build(b"banana");
//! assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
//! assert_eq!(lcp::build(b"banana", &sa).unwrap(), vec![1, 3, 0, 0, 2, 0]);
//! assert_eq!(query::find_all(b"banana", &sa, b"ana"), vec![1, 3]);
//! ```
//!
//! # Example (from JavaScript)
//!
//! ```javascript
//! import init, { search, SuffixIndex } from 'stringalg-core';
//!
//! await init();
//! const text = new TextEncoder().encode('abracadabra');
//! const hits = search(text, new TextEncoder().encode('abra'), { algorithm: 'rabin_karp' });
//! const index = new SuffixIndex(text);
//! index.count(new TextEncoder().encode('a'));
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod kmp;
pub mod lcp;
pub mod query;
pub mod rabin_karp;
pub mod suffix_array;
#[cfg(feature = "parallel")]
pub mod suffix_array_parallel;
pub mod types;

pub use config::{JsSearchConfig, SearchAlgorithm, SearchConfig};
pub use error::LcpError;
pub use index::SuffixIndex;
pub use types::{Occurrences, Offset, Repeat, Symbol};

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in WASM.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Search `text` for `pattern` with the configured algorithm.
///
/// All algorithms return the same ascending occurrence set. With
/// `allow_overlap` off, matches are thinned greedily from the left.
pub fn search_internal(
    text: &[Symbol],
    pattern: &[Symbol],
    config: &SearchConfig,
) -> Occurrences {
    let found = match config.algorithm {
        SearchAlgorithm::Kmp => kmp::search(text, pattern),
        SearchAlgorithm::RabinKarp => rabin_karp::search(text, pattern),
        SearchAlgorithm::SuffixArray => {
            let sa = suffix_array::build_auto(text, config.parallel, config.parallel_threshold);
            query::find_all(text, &sa, pattern)
        }
    };

    if config.allow_overlap {
        found
    } else {
        types::non_overlapping(&found, pattern.len())
    }
}

/// Repeated substrings of `text` with at least `min_len` symbols.
pub fn find_repeats_internal(text: &[Symbol], config: &SearchConfig) -> Vec<Repeat> {
    SuffixIndex::build_with(text, config).repeats(config.min_repeat_length)
}

/// Narrow offsets to `u32`, failing with the first one that does not fit.
///
/// Wasm32 offsets always fit; a 64-bit host can hold larger texts.
fn narrow_offsets(offsets: &[usize]) -> Result<Vec<u32>, usize> {
    offsets
        .iter()
        .map(|&o| u32::try_from(o).map_err(|_| o))
        .collect()
}

/// Offsets as `u32` for the JS boundary.
pub(crate) fn to_js_offsets(offsets: &[usize]) -> Result<Vec<u32>, JsValue> {
    narrow_offsets(offsets)
        .map_err(|o| JsValue::from_str(&format!("offset {o} does not fit in u32")))
}

fn from_js_offsets(offsets: &[u32]) -> Vec<usize> {
    offsets.iter().map(|&o| o as usize).collect()
}

fn parse_config(config: JsValue) -> Result<SearchConfig, JsValue> {
    let js_config: JsSearchConfig = if config.is_undefined() || config.is_null() {
        JsSearchConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    js_config
        .merge_with_defaults()
        .map_err(|e| JsValue::from_str(&e))
}

/// Find all occurrences of `pattern` with Knuth-Morris-Pratt.
#[wasm_bindgen]
pub fn kmp_search(text: &[u8], pattern: &[u8]) -> Result<Vec<u32>, JsValue> {
    to_js_offsets(&kmp::search(text, pattern))
}

/// Find all occurrences of `pattern` with Rabin-Karp.
#[wasm_bindgen]
pub fn rabin_karp_search(text: &[u8], pattern: &[u8]) -> Result<Vec<u32>, JsValue> {
    to_js_offsets(&rabin_karp::search(text, pattern))
}

/// Build the suffix array of `text`.
#[wasm_bindgen]
pub fn build_suffix_array(text: &[u8]) -> Result<Vec<u32>, JsValue> {
    to_js_offsets(&suffix_array::build(text))
}

/// Build the LCP array of `text` from its suffix array.
///
/// # Errors
///
/// Fails if `sa` is not the suffix array of `text`.
#[wasm_bindgen]
pub fn lcp_array(text: &[u8], sa: &[u32]) -> Result<Vec<u32>, JsValue> {
    let lcp = lcp::build(text, &from_js_offsets(sa))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js_offsets(&lcp)
}

/// Find all occurrences of `pattern` using a prebuilt suffix array.
#[wasm_bindgen]
pub fn suffix_array_find_all(
    text: &[u8],
    sa: &[u32],
    pattern: &[u8],
) -> Result<Vec<u32>, JsValue> {
    to_js_offsets(&query::find_all(text, &from_js_offsets(sa), pattern))
}

/// Search for a pattern.
///
/// # Arguments
///
/// * `text` - The text to search (Uint8Array from JS)
/// * `pattern` - The pattern to look for
/// * `config` - Optional configuration (JsValue representing JsSearchConfig)
///
/// # Returns
///
/// Ascending start offsets of every match.
#[wasm_bindgen]
pub fn search(text: &[u8], pattern: &[u8], config: JsValue) -> Result<Vec<u32>, JsValue> {
    let config = parse_config(config)?;
    to_js_offsets(&search_internal(text, pattern, &config))
}

/// Discover repeated substrings without building an index on the JS side.
///
/// Useful for analysis.
#[wasm_bindgen]
pub fn find_repeats(text: &[u8], config: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let repeats = find_repeats_internal(text, &config);

    // Convert to JS-friendly format
    let result: Vec<serde_json::Value> = repeats
        .iter()
        .map(|r| {
            serde_json::json!({
                "bytes": r.bytes(text),
                "length": r.length,
                "positions": r.positions,
                "count": r.count(),
                "nonOverlapping": types::count_non_overlapping(&r.positions, r.length),
            })
        })
        .collect();

    // Plain objects rather than JS Maps
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
