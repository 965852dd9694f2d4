//! Errors for operations with preconditions on their inputs.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The suffix array handed to the LCP builder does not belong to the text.
///
/// Kasai's algorithm indexes the text through the suffix array, so a
/// mismatched pair is rejected up front instead of producing garbage.
///
/// # Examples
///
/// ```
/// use stringalg_core::{lcp, LcpError};
///
/// let result = lcp::build(b"banana", &[0, 1, 2]);
/// assert!(matches!(result, Err(LcpError::LengthMismatch { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LcpError {
    /// The suffix array and the text have different lengths
    LengthMismatch {
        text_len: usize,
        suffix_array_len: usize,
    },
    /// The suffix array is not a permutation of `0..n`
    NotAPermutation { position: usize, offset: usize },
}

impl Display for LcpError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LcpError::LengthMismatch {
                text_len,
                suffix_array_len,
            } => write!(
                f,
                "suffix array length mismatch: text has {text_len} symbols, suffix array has {suffix_array_len} entries",
            ),
            LcpError::NotAPermutation { position, offset } => write!(
                f,
                "not a suffix array: entry {position} holds offset {offset}, which is out of range or repeated",
            ),
        }
    }
}

impl Error for LcpError {}
