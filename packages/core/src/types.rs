//! Core types shared by the matchers and the suffix-array index.
//!
//! Every algorithm works on raw byte sequences; nothing here is Unicode aware.

use serde::{Deserialize, Serialize};

/// A symbol of the text or pattern.
pub type Symbol = u8;

/// A zero-based start position into the text.
pub type Offset = usize;

/// Start offsets of exact pattern matches, ascending and unique.
pub type Occurrences = Vec<Offset>;

/// A substring that occurs more than once in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeat {
    /// Length of the repeated substring
    pub length: usize,
    /// Start offsets of every occurrence (ascending, possibly overlapping)
    pub positions: Vec<Offset>,
}

impl Repeat {
    pub fn new(length: usize, mut positions: Vec<Offset>) -> Self {
        positions.sort_unstable();
        Self { length, positions }
    }

    /// Number of occurrences, overlapping ones included.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// The repeated bytes, taken from the first occurrence.
    pub fn bytes<'a>(&self, text: &'a [Symbol]) -> &'a [Symbol] {
        match self.positions.first() {
            Some(&start) => &text[start..start + self.length],
            None => &[],
        }
    }

    /// Occurrences that can be taken left to right without overlapping.
    pub fn non_overlapping(&self) -> Vec<Offset> {
        non_overlapping(&self.positions, self.length)
    }
}

/// Count non-overlapping occurrences of a pattern of given length.
#[inline]
pub fn count_non_overlapping(positions: &[Offset], length: usize) -> usize {
    let mut count = 0;
    let mut next_free = 0;

    for &pos in positions {
        if pos >= next_free {
            count += 1;
            next_free = pos + length;
        }
    }

    count
}

/// Extract non-overlapping positions from a sorted position list.
///
/// Greedy from the left: a position is kept when it starts at or after the end
/// of the previously kept one.
pub fn non_overlapping(positions: &[Offset], length: usize) -> Vec<Offset> {
    let mut result = Vec::with_capacity(positions.len());
    let mut next_free = 0;

    for &pos in positions {
        if pos >= next_free {
            result.push(pos);
            next_free = pos + length;
        }
    }

    result
}

/// Check that every offset is an exact match of `pattern` in `text`.
pub fn verify_occurrences(text: &[Symbol], pattern: &[Symbol], positions: &[Offset]) -> bool {
    positions
        .iter()
        .all(|&pos| text.get(pos..pos + pattern.len()) == Some(pattern))
}

/// True when the inputs can hold no match at all.
///
/// Empty text, empty pattern and a pattern longer than the text all yield an
/// empty occurrence set rather than an error.
#[inline]
pub(crate) fn is_degenerate(text: &[Symbol], pattern: &[Symbol]) -> bool {
    pattern.is_empty() || text.is_empty() || pattern.len() > text.len()
}
