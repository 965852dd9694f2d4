//! Knuth-Morris-Pratt search.
//!
//! Builds the prefix function of the pattern, then scans the text once. The
//! text index only ever moves forward; mismatches fall back through the table.
//!
//! Time complexity: O(n + m)

use crate::types::{is_degenerate, Occurrences, Symbol};

/// Compute the prefix function of `pattern`.
///
/// Entry `i` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
///
/// # Examples
///
/// ```
/// use stringalg_core::kmp::prefix_function;
///
/// assert_eq!(prefix_function(b"ababd"), vec![0, 0, 1, 2, 0]);
/// ```
pub fn prefix_function(pattern: &[Symbol]) -> Vec<usize> {
    let m = pattern.len();
    let mut table = vec![0usize; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}

/// Find every (possibly overlapping) occurrence of `pattern` in `text`.
///
/// Returns start offsets in ascending order. Degenerate inputs yield an empty
/// result.
///
/// # Examples
///
/// ```
/// use stringalg_core::kmp;
///
/// assert_eq!(kmp::search(b"ababcabcabababd", b"ababd"), vec![10]);
/// assert_eq!(kmp::search(b"aaaaa", b"aa"), vec![0, 1, 2, 3]);
/// ```
pub fn search(text: &[Symbol], pattern: &[Symbol]) -> Occurrences {
    if is_degenerate(text, pattern) {
        return Vec::new();
    }

    let n = text.len();
    let m = pattern.len();
    let table = prefix_function(pattern);

    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                result.push(i - m);
                j = table[j - 1];
            }
        } else if j != 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }

    result
}
