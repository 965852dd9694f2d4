//! Rabin-Karp search with a polynomial rolling hash.
//!
//! The hash of a window `w` is `sum(w[i] * BASE^(m-1-i)) mod MODULUS`. Equal
//! hashes only nominate a candidate; every candidate is compared byte by byte
//! before it is reported.
//!
//! Time complexity: O(n + m) expected, O(n * m) worst case

use crate::types::{is_degenerate, Occurrences, Symbol};

/// Polynomial base, one step per byte value.
pub const BASE: u64 = 256;

/// Prime modulus. `BASE * MODULUS` fits comfortably in a `u64`.
pub const MODULUS: u64 = 1_000_000_007;

/// Hash of a fixed-width window that can slide one symbol at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    hash: u64,
    /// BASE^(width-1) mod MODULUS, the weight of the outgoing symbol
    power: u64,
}

impl RollingHash {
    /// Hash `window` from scratch.
    pub fn new(window: &[Symbol]) -> Self {
        let mut hash = 0u64;
        let mut power = 1u64;

        for (i, &symbol) in window.iter().enumerate() {
            hash = (hash * BASE + u64::from(symbol)) % MODULUS;
            if i + 1 < window.len() {
                power = (power * BASE) % MODULUS;
            }
        }

        Self { hash, power }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.hash
    }

    /// Slide the window: drop `outgoing` from the front, append `incoming`.
    #[inline]
    pub fn roll(&mut self, outgoing: Symbol, incoming: Symbol) {
        let leading = (u64::from(outgoing) * self.power) % MODULUS;
        self.hash = (self.hash + MODULUS - leading) % MODULUS;
        self.hash = (self.hash * BASE + u64::from(incoming)) % MODULUS;
    }
}

/// Find every (possibly overlapping) occurrence of `pattern` in `text`.
///
/// Returns start offsets in ascending order. Degenerate inputs yield an empty
/// result.
///
/// # Examples
///
/// ```
/// use stringalg_core::rabin_karp;
///
/// assert_eq!(rabin_karp::search(b"abracadabra", b"abra"), vec![0, 7]);
/// ```
pub fn search(text: &[Symbol], pattern: &[Symbol]) -> Occurrences {
    if is_degenerate(text, pattern) {
        return Vec::new();
    }

    let n = text.len();
    let m = pattern.len();

    let target = RollingHash::new(pattern).value();
    let mut window = RollingHash::new(&text[..m]);

    let mut result = Vec::new();
    for i in 0..=n - m {
        if window.value() == target && text[i..i + m] == *pattern {
            result.push(i);
        }
        if i < n - m {
            window.roll(text[i], text[i + m]);
        }
    }

    result
}
