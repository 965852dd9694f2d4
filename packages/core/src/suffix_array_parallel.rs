//! Parallel suffix array construction using Rayon.
//!
//! Same prefix-doubling algorithm as [`crate::suffix_array`], with the
//! per-step sort run through rayon's stable parallel sort. The sort key is a
//! total order on (rank, next rank), so the output is identical to the
//! sequential builder.

use crate::suffix_array::{self, reassign_ranks, RankContext};
use crate::types::{Offset, Symbol};
use rayon::prelude::*;

/// Configuration for parallel suffix array construction.
#[derive(Debug, Clone)]
pub struct ParallelSAConfig {
    /// Minimum input size to use parallel construction.
    /// Below this threshold, sequential is faster due to overhead.
    pub parallel_threshold: usize,
}

impl Default for ParallelSAConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10_000,
        }
    }
}

impl ParallelSAConfig {
    /// Whether a text of `len` symbols is built in parallel.
    pub fn runs_parallel(&self, len: usize) -> bool {
        len > 0 && len >= self.parallel_threshold
    }
}

/// Build suffix array using parallel doubling algorithm.
///
/// Falls back to sequential for small inputs where parallelism overhead
/// would exceed benefits.
///
/// Time complexity: O(n log^2 n / p) where p is number of processors
/// Space complexity: O(n)
pub fn build_parallel(text: &[Symbol], config: &ParallelSAConfig) -> Vec<Offset> {
    let n = text.len();

    if !config.runs_parallel(n) {
        return suffix_array::build(text);
    }

    let mut rank: Vec<usize> = text.par_iter().map(|&s| usize::from(s)).collect();
    let mut sa: Vec<Offset> = (0..n).collect();
    let mut tmp = vec![0usize; n];
    let mut k = 1usize;

    while k < n {
        let ctx = RankContext { rank: &rank, k };
        sa.par_sort_by_key(|&i| ctx.key(i));

        // Re-ranking carries a running class id, so it stays sequential
        let classes = reassign_ranks(&sa, ctx, &mut tmp);
        rank.copy_from_slice(&tmp);

        if classes == n {
            break;
        }

        k *= 2;
    }

    sa
}

/// Build suffix array with automatic parallel/sequential selection.
///
/// Parallel when enabled and `text` holds at least `parallel_threshold`
/// symbols.
pub fn build_auto(
    text: &[Symbol],
    enable_parallel: bool,
    parallel_threshold: usize,
) -> Vec<Offset> {
    if enable_parallel {
        build_parallel(text, &ParallelSAConfig { parallel_threshold })
    } else {
        suffix_array::build(text)
    }
}
