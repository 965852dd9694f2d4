//! Longest-common-prefix array and repeat analysis.
//!
//! The LCP array is computed with Kasai's algorithm in O(n). Entry `r` holds
//! the length of the common prefix of the suffixes at `sa[r]` and `sa[r + 1]`;
//! the last entry has no right neighbour and is always 0.

use crate::error::LcpError;
use crate::types::{Offset, Repeat, Symbol};

/// Build the LCP array of `text` from its suffix array.
///
/// # Errors
///
/// Returns [`LcpError::LengthMismatch`] if `sa` and `text` differ in length,
/// and [`LcpError::NotAPermutation`] if `sa` holds an offset that is out of
/// range or repeated.
///
/// # Examples
///
/// ```
/// use stringalg_core::{lcp, suffix_array};
///
/// let text = b"banana";
/// let sa = suffix_array::build(text);
/// assert_eq!(lcp::build(text, &sa).unwrap(), vec![1, 3, 0, 0, 2, 0]);
/// ```
pub fn build(text: &[Symbol], sa: &[Offset]) -> Result<Vec<usize>, LcpError> {
    let n = text.len();
    if sa.len() != n {
        return Err(LcpError::LengthMismatch {
            text_len: n,
            suffix_array_len: sa.len(),
        });
    }

    let inv = inverse(sa)?;
    let mut lcp = vec![0usize; n];

    // `h` carries over between offsets: the suffix at i + 1 shares at least
    // h - 1 symbols with its successor. Resetting it to 0 each round stays
    // correct but degrades to O(n^2).
    let mut h = 0usize;

    for i in 0..n {
        let pos = inv[i];
        if pos == n - 1 {
            h = 0;
            continue;
        }

        let j = sa[pos + 1];

        // Extend the match
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }

        lcp[pos] = h;

        h = h.saturating_sub(1);
    }

    Ok(lcp)
}

/// Inverse suffix array: `inv[sa[r]] == r`.
fn inverse(sa: &[Offset]) -> Result<Vec<usize>, LcpError> {
    let n = sa.len();
    let mut inv = vec![usize::MAX; n];

    for (position, &offset) in sa.iter().enumerate() {
        match inv.get_mut(offset) {
            Some(slot) if *slot == usize::MAX => *slot = position,
            _ => return Err(LcpError::NotAPermutation { position, offset }),
        }
    }

    Ok(inv)
}

/// A run of adjacent suffixes that all share a prefix of `length` symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcpInterval {
    /// First suffix array position in the run
    pub start: usize,
    /// Last suffix array position in the run (inclusive)
    pub end: usize,
    /// Minimum LCP across the run
    pub length: usize,
}

/// Extract LCP intervals representing repeated substrings.
///
/// Each interval is maximal: extending it by one suffix on either side would
/// lower its shared prefix. Only intervals with `length >= min_len` are
/// returned, innermost (longest) first within a nest.
///
/// A Kasai array ends in 0, which closes every run. Runs still open when the
/// input ends without one are closed at position `lcp.len()`.
pub fn intervals(lcp: &[usize], min_len: usize) -> Vec<LcpInterval> {
    let min_len = min_len.max(1);
    let mut found = Vec::new();
    let mut stack: Vec<(usize, usize)> = vec![(0, 0)]; // (lcp value, start)

    // lcp[i - 1] is the prefix shared by positions i - 1 and i
    for i in 1..=lcp.len() {
        let value = lcp[i - 1];
        let mut start = i - 1;

        while let Some(&(top, top_start)) = stack.last() {
            if top <= value {
                break;
            }
            stack.pop();
            if top >= min_len {
                found.push(LcpInterval {
                    start: top_start,
                    end: i - 1,
                    length: top,
                });
            }
            start = top_start;
        }

        if stack.last().map_or(true, |&(top, _)| top < value) {
            stack.push((value, start));
        }
    }

    // Drain what the input left open
    let end = lcp.len();
    while let Some((top, top_start)) = stack.pop() {
        if top >= min_len {
            found.push(LcpInterval {
                start: top_start,
                end,
                length: top,
            });
        }
    }

    found
}

/// Repeated substrings of at least `min_len` symbols.
///
/// One [`Repeat`] per LCP interval, ordered longest first, then by first
/// occurrence. Intervals that reach past the end of `sa` are skipped.
pub fn repeats(sa: &[Offset], lcp: &[usize], min_len: usize) -> Vec<Repeat> {
    let mut found: Vec<Repeat> = intervals(lcp, min_len)
        .into_iter()
        .filter_map(|iv| {
            let positions = sa.get(iv.start..=iv.end)?;
            Some(Repeat::new(iv.length, positions.to_vec()))
        })
        .collect();

    found.sort_by(|a, b| {
        b.length
            .cmp(&a.length)
            .then_with(|| a.positions.first().cmp(&b.positions.first()))
    });

    found
}

/// The longest substring that occurs at least twice.
///
/// Ties go to the one that occurs first in the text.
pub fn longest_repeat(sa: &[Offset], lcp: &[usize]) -> Option<Repeat> {
    repeats(sa, lcp, 1).into_iter().next()
}
