//! Pattern search over a built suffix array.
//!
//! All suffixes that start with the pattern sit next to each other in the
//! suffix array, so two binary searches bound the whole block.
//!
//! Time complexity: O(m log n)

use crate::types::{is_degenerate, Occurrences, Offset, Symbol};
use std::cmp::Ordering;
use std::ops::Range;

/// Compare a suffix against a pattern over the pattern's length.
///
/// Returns `Equal` when `pattern` is a prefix of `suffix`. A suffix that is a
/// strict prefix of the pattern compares `Less`: it is too short to be a
/// match.
#[inline]
pub fn prefix_compare(suffix: &[Symbol], pattern: &[Symbol]) -> Ordering {
    let l = suffix.len().min(pattern.len());
    match suffix[..l].cmp(&pattern[..l]) {
        Ordering::Equal if l < pattern.len() => Ordering::Less,
        ordering => ordering,
    }
}

/// Range of suffix array positions whose suffixes start with `pattern`.
///
/// The range is empty for degenerate inputs, for a suffix array whose length
/// differs from the text, and when the pattern does not occur.
pub fn search_range(text: &[Symbol], sa: &[Offset], pattern: &[Symbol]) -> Range<usize> {
    if is_degenerate(text, pattern) || sa.len() != text.len() {
        return 0..0;
    }

    let compare = |&offset: &Offset| prefix_compare(text.get(offset..).unwrap_or(&[]), pattern);

    // First position not less than the pattern
    let lower = sa.partition_point(|o| compare(o) == Ordering::Less);
    // First position strictly greater than the pattern
    let upper = sa.partition_point(|o| compare(o) != Ordering::Greater);

    lower..upper.max(lower)
}

/// Find every occurrence of `pattern` using the suffix array of `text`.
///
/// `sa` must be the suffix array of `text` as returned by
/// [`crate::suffix_array::build`]. Offsets come back in ascending text order.
///
/// # Examples
///
/// ```
/// use stringalg_core::{query, suffix_array};
///
/// let text = b"abracadabra";
/// let sa = suffix_array::build(text);
/// assert_eq!(query::find_all(text, &sa, b"abra"), vec![0, 7]);
/// ```
pub fn find_all(text: &[Symbol], sa: &[Offset], pattern: &[Symbol]) -> Occurrences {
    let range = search_range(text, sa, pattern);
    if range.is_empty() {
        return Vec::new();
    }

    let mut result = sa[range].to_vec();
    // Suffix order is not text order
    result.sort_unstable();
    result
}

/// Number of occurrences of `pattern`, without materializing them.
pub fn count(text: &[Symbol], sa: &[Offset], pattern: &[Symbol]) -> usize {
    search_range(text, sa, pattern).len()
}

/// Returns `true` if `pattern` occurs in `text`.
pub fn contains(text: &[Symbol], sa: &[Offset], pattern: &[Symbol]) -> bool {
    !search_range(text, sa, pattern).is_empty()
}
