//! Suffix array construction.
//!
//! Implements O(n log n) construction using the prefix-doubling algorithm: at
//! step `k` every suffix is keyed by the pair (rank of its first `k` symbols,
//! rank of the next `k`), sorted, and re-ranked. Ranks only ever split, so the
//! loop stops as soon as every suffix has a class of its own.

use crate::types::{Offset, Symbol};

/// Sort key state for one doubling step.
///
/// `rank` maps a text offset to its equivalence class after the previous
/// step. A suffix that runs out before `offset + k` gets `None` as its second
/// key, which orders it before every real class.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankContext<'a> {
    pub(crate) rank: &'a [usize],
    pub(crate) k: usize,
}

impl RankContext<'_> {
    #[inline]
    pub(crate) fn key(&self, offset: Offset) -> (usize, Option<usize>) {
        (self.rank[offset], self.rank.get(offset + self.k).copied())
    }
}

/// Build the suffix array of `text`.
///
/// `result[i]` is the start of the i-th lexicographically smallest suffix.
/// Shorter suffixes sort before longer ones they are a prefix of.
///
/// Time complexity: O(n log^2 n) comparisons, O(n) extra space
///
/// # Examples
///
/// ```
/// use stringalg_core::suffix_array;
///
/// assert_eq!(suffix_array::build(b"banana"), vec![5, 3, 1, 0, 4, 2]);
/// ```
pub fn build(text: &[Symbol]) -> Vec<Offset> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    // Initial ranking is the raw symbol value
    let mut rank: Vec<usize> = text.iter().map(|&s| usize::from(s)).collect();
    let mut sa: Vec<Offset> = (0..n).collect();
    let mut tmp = vec![0usize; n];
    let mut k = 1usize;

    while k < n {
        let ctx = RankContext { rank: &rank, k };

        // Sort by (rank[i], rank[i+k])
        sa.sort_by_key(|&i| ctx.key(i));

        let classes = reassign_ranks(&sa, ctx, &mut tmp);
        rank.copy_from_slice(&tmp);

        // Every suffix uniquely ordered
        if classes == n {
            break;
        }

        k *= 2;
    }

    sa
}

/// Give each suffix in `sa` its class under `ctx`, writing into `out`.
///
/// Classes count up from 0 in sorted order; neighbours with equal keys share a
/// class. Returns the number of distinct classes.
pub(crate) fn reassign_ranks(sa: &[Offset], ctx: RankContext<'_>, out: &mut [usize]) -> usize {
    let Some((&first, rest)) = sa.split_first() else {
        return 0;
    };

    out[first] = 0;
    let mut class = 0;
    let mut prev_key = ctx.key(first);

    for &curr in rest {
        let curr_key = ctx.key(curr);
        if curr_key != prev_key {
            class += 1;
        }
        out[curr] = class;
        prev_key = curr_key;
    }

    class + 1
}

/// Check that `sa` is a permutation of `0..text.len()` in suffix order.
///
/// O(n^2) in the worst case; meant for tests and debug assertions.
pub fn is_valid(text: &[Symbol], sa: &[Offset]) -> bool {
    if sa.len() != text.len() {
        return false;
    }

    let mut seen = vec![false; sa.len()];
    for &offset in sa {
        match seen.get_mut(offset) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }

    sa.windows(2).all(|pair| text[pair[0]..] < text[pair[1]..])
}

/// Build suffix array with automatic parallel/sequential selection.
///
/// When compiled with the `parallel` feature and `text` holds at least
/// `parallel_threshold` symbols, uses parallel construction.
#[cfg(feature = "parallel")]
pub fn build_auto(
    text: &[Symbol],
    enable_parallel: bool,
    parallel_threshold: usize,
) -> Vec<Offset> {
    crate::suffix_array_parallel::build_auto(text, enable_parallel, parallel_threshold)
}

/// Build suffix array (sequential only when parallel feature not enabled).
#[cfg(not(feature = "parallel"))]
pub fn build_auto(
    text: &[Symbol],
    _enable_parallel: bool,
    _parallel_threshold: usize,
) -> Vec<Offset> {
    build(text)
}
