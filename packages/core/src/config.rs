//! Search configuration and its JavaScript-facing form.

use serde::{Deserialize, Serialize};

/// Which matcher answers a `search` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Prefix-function scan
    #[default]
    Kmp,
    /// Rolling hash with direct verification
    RabinKarp,
    /// Suffix array built for the call, then two binary searches
    SuffixArray,
}

impl SearchAlgorithm {
    /// Parse an algorithm name, accepting a few common spellings.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "kmp" | "knuth_morris_pratt" => Some(Self::Kmp),
            "rabin_karp" | "rabin-karp" | "rabinkarp" => Some(Self::RabinKarp),
            "suffix_array" | "suffix-array" | "sa" => Some(Self::SuffixArray),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Kmp => "kmp",
            Self::RabinKarp => "rabin_karp",
            Self::SuffixArray => "suffix_array",
        }
    }
}

/// Configuration for a search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Matcher to run
    pub algorithm: SearchAlgorithm,
    /// Report overlapping matches ("aa" in "aaaa" -> 0, 1, 2)
    pub allow_overlap: bool,
    /// Build suffix arrays with rayon when the `parallel` feature is on
    pub parallel: bool,
    /// Minimum text length before parallel construction pays off
    pub parallel_threshold: usize,
    /// Shortest repeat reported by repeat analysis
    pub min_repeat_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::Kmp,
            allow_overlap: true,
            parallel: false,
            parallel_threshold: 10_000,
            min_repeat_length: 2,
        }
    }
}

/// Search configuration as passed in from JavaScript.
///
/// Every field is optional; missing ones fall back to [`SearchConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsSearchConfig {
    pub algorithm: Option<String>,
    pub allow_overlap: Option<bool>,
    pub parallel: Option<bool>,
    pub parallel_threshold: Option<usize>,
    pub min_repeat_length: Option<usize>,
}

impl JsSearchConfig {
    /// Resolve into a full config.
    ///
    /// Fails only on an unknown algorithm name.
    pub fn merge_with_defaults(&self) -> Result<SearchConfig, String> {
        let defaults = SearchConfig::default();

        let algorithm = match &self.algorithm {
            Some(name) => SearchAlgorithm::parse(name)
                .ok_or_else(|| format!("unknown search algorithm: {name:?}"))?,
            None => defaults.algorithm,
        };

        Ok(SearchConfig {
            algorithm,
            allow_overlap: self.allow_overlap.unwrap_or(defaults.allow_overlap),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            parallel_threshold: self.parallel_threshold.unwrap_or(defaults.parallel_threshold),
            min_repeat_length: self
                .min_repeat_length
                .unwrap_or(defaults.min_repeat_length)
                .max(1),
        })
    }
}
