//! An owned text together with its suffix array.
//!
//! Build once, query many times. The index keeps its own copy of the text so
//! the suffix array can never be paired with the wrong sequence.

use crate::config::SearchConfig;
use crate::lcp;
use crate::query;
use crate::suffix_array;
use crate::types::{Occurrences, Offset, Repeat, Symbol};
use wasm_bindgen::prelude::*;

/// Suffix array index over a byte sequence.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    text: Vec<Symbol>,
    suffix_array: Vec<Offset>,
}

impl SuffixIndex {
    /// Index `text`.
    pub fn build(text: &[Symbol]) -> Self {
        Self::build_with(text, &SearchConfig::default())
    }

    /// Index `text`, building the suffix array in parallel when `config`
    /// enables it and the text reaches its threshold.
    pub fn build_with(text: &[Symbol], config: &SearchConfig) -> Self {
        Self {
            text: text.to_vec(),
            suffix_array: suffix_array::build_auto(
                text,
                config.parallel,
                config.parallel_threshold,
            ),
        }
    }

    pub fn text(&self) -> &[Symbol] {
        &self.text
    }

    pub fn suffix_array(&self) -> &[Offset] {
        &self.suffix_array
    }

    /// Every occurrence of `pattern`, ascending.
    pub fn find_all(&self, pattern: &[Symbol]) -> Occurrences {
        query::find_all(&self.text, &self.suffix_array, pattern)
    }

    /// LCP array of the indexed text.
    pub fn lcp(&self) -> Vec<usize> {
        // The index built its own suffix array, so the pair always matches
        lcp::build(&self.text, &self.suffix_array).unwrap_or_default()
    }

    /// Repeated substrings of at least `min_len` symbols, longest first.
    pub fn repeats(&self, min_len: usize) -> Vec<Repeat> {
        lcp::repeats(&self.suffix_array, &self.lcp(), min_len)
    }

    /// The longest substring that occurs at least twice.
    pub fn longest_repeat(&self) -> Option<Repeat> {
        lcp::longest_repeat(&self.suffix_array, &self.lcp())
    }
}

#[wasm_bindgen]
impl SuffixIndex {
    /// Create a new index over `text`.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &[u8]) -> SuffixIndex {
        Self::build(text)
    }

    /// Number of indexed symbols.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &[u8]) -> usize {
        query::count(&self.text, &self.suffix_array, pattern)
    }

    /// Check if `pattern` occurs in the text.
    pub fn contains(&self, pattern: &[u8]) -> bool {
        query::contains(&self.text, &self.suffix_array, pattern)
    }

    /// Get all match offsets as a JS array.
    #[wasm_bindgen(js_name = findAll)]
    pub fn find_all_js(&self, pattern: &[u8]) -> Result<Vec<u32>, JsValue> {
        crate::to_js_offsets(&self.find_all(pattern))
    }

    /// Get the suffix array as a JS array.
    #[wasm_bindgen(js_name = getSuffixArray)]
    pub fn get_suffix_array(&self) -> Result<Vec<u32>, JsValue> {
        crate::to_js_offsets(&self.suffix_array)
    }

    /// Get the LCP array as a JS array.
    #[wasm_bindgen(js_name = getLcp)]
    pub fn get_lcp(&self) -> Result<Vec<u32>, JsValue> {
        crate::to_js_offsets(&self.lcp())
    }
}
