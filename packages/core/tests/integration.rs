//! Integration tests for Stringalg Core.
//!
//! These tests check the algorithms against each other and against brute
//! force over seeded random inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stringalg_core::*;

/// Reference implementation: test every window.
fn brute_force(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

fn random_text(rng: &mut StdRng, len: usize, alphabet: u8) -> Vec<u8> {
    (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect()
}

#[test]
fn test_concrete_cases() {
    assert_eq!(kmp::search(b"ababcabcabababd", b"ababd"), vec![10]);
    assert_eq!(kmp::search(b"aaaaa", b"aa"), vec![0, 1, 2, 3]);
    assert_eq!(rabin_karp::search(b"abracadabra", b"abra"), vec![0, 7]);

    let sa = suffix_array::build(b"banana");
    assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
    assert_eq!(lcp::build(b"banana", &sa).unwrap(), vec![1, 3, 0, 0, 2, 0]);

    let sa = suffix_array::build(b"abracadabra");
    assert_eq!(query::find_all(b"abracadabra", &sa, b"abra"), vec![0, 7]);
}

#[test]
fn test_all_algorithms_agree_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..300 {
        let n = rng.gen_range(0..80);
        let alphabet = rng.gen_range(1..5);
        let text = random_text(&mut rng, n, alphabet);

        // Half the patterns are cut from the text so matches are common
        let pattern = if n > 0 && round % 2 == 0 {
            let start = rng.gen_range(0..n);
            let len = rng.gen_range(1..=(n - start).min(6));
            text[start..start + len].to_vec()
        } else {
            let m = rng.gen_range(0..6);
            random_text(&mut rng, m, alphabet)
        };

        let expected = brute_force(&text, &pattern);
        let sa = suffix_array::build(&text);

        assert_eq!(kmp::search(&text, &pattern), expected, "kmp {text:?} {pattern:?}");
        assert_eq!(
            rabin_karp::search(&text, &pattern),
            expected,
            "rabin-karp {text:?} {pattern:?}"
        );
        assert_eq!(
            query::find_all(&text, &sa, &pattern),
            expected,
            "suffix array {text:?} {pattern:?}"
        );
        assert_eq!(query::count(&text, &sa, &pattern), expected.len());
        assert!(types::verify_occurrences(&text, &pattern, &expected));
    }
}

#[test]
fn test_suffix_array_is_sorted_permutation() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let n = rng.gen_range(0..120);
        let alphabet = rng.gen_range(1..4);
        let text = random_text(&mut rng, n, alphabet);

        let sa = suffix_array::build(&text);
        assert!(suffix_array::is_valid(&text, &sa), "{text:?} -> {sa:?}");

        // Compare against sorting suffixes directly
        let mut naive: Vec<usize> = (0..n).collect();
        naive.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        assert_eq!(sa, naive);
    }
}

#[test]
fn test_lcp_matches_direct_comparison() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let n = rng.gen_range(1..120);
        let alphabet = rng.gen_range(1..4);
        let text = random_text(&mut rng, n, alphabet);

        let sa = suffix_array::build(&text);
        let lcp = lcp::build(&text, &sa).unwrap();

        assert_eq!(lcp.len(), n);
        assert_eq!(lcp[n - 1], 0);
        for r in 0..n - 1 {
            let shared = text[sa[r]..]
                .iter()
                .zip(&text[sa[r + 1]..])
                .take_while(|(a, b)| a == b)
                .count();
            assert_eq!(lcp[r], shared, "{text:?} rank {r}");
        }
    }
}

#[test]
fn test_rabin_karp_verifies_candidates() {
    // Long windows over a binary alphabet produce many distinct hashes; every
    // reported offset must still be an exact match
    let mut rng = StdRng::seed_from_u64(99);
    let text: Vec<u8> = (0..5_000).map(|_| rng.gen_range(0..2)).collect();
    let pattern = text[2_000..2_032].to_vec();

    let found = rabin_karp::search(&text, &pattern);
    assert!(found.contains(&2_000));
    assert!(types::verify_occurrences(&text, &pattern, &found));
    assert_eq!(found, kmp::search(&text, &pattern));
}

#[test]
fn test_idempotent() {
    let text = b"she sells sea shells by the sea shore";
    assert_eq!(kmp::search(text, b"se"), kmp::search(text, b"se"));
    assert_eq!(rabin_karp::search(text, b"sea"), rabin_karp::search(text, b"sea"));
    assert_eq!(suffix_array::build(text), suffix_array::build(text));
}

#[test]
fn test_degenerate_inputs_never_fail() {
    let empty: &[u8] = b"";
    let cases = [
        (empty, &b"a"[..]),
        (&b"a"[..], empty),
        (empty, empty),
        (&b"ab"[..], &b"abc"[..]),
    ];
    for (text, pattern) in cases {
        assert!(kmp::search(text, pattern).is_empty());
        assert!(rabin_karp::search(text, pattern).is_empty());
        let sa = suffix_array::build(text);
        assert!(query::find_all(text, &sa, pattern).is_empty());
    }
    assert!(suffix_array::build(b"").is_empty());
}

#[test]
fn test_lcp_rejects_foreign_suffix_array() {
    let sa = suffix_array::build(b"banana");
    assert!(matches!(
        lcp::build(b"bananas", &sa),
        Err(LcpError::LengthMismatch {
            text_len: 7,
            suffix_array_len: 6
        })
    ));
    assert!(matches!(
        lcp::build(b"banana", &[0, 0, 0, 0, 0, 0]),
        Err(LcpError::NotAPermutation { position: 1, offset: 0 })
    ));
}

#[test]
fn test_search_internal_configurations() {
    let text = b"abababab";
    let mut config = SearchConfig::default();
    assert_eq!(search_internal(text, b"abab", &config), vec![0, 2, 4]);

    config.allow_overlap = false;
    assert_eq!(search_internal(text, b"abab", &config), vec![0, 4]);

    config.algorithm = SearchAlgorithm::SuffixArray;
    assert_eq!(search_internal(text, b"abab", &config), vec![0, 4]);

    config.algorithm = SearchAlgorithm::RabinKarp;
    config.allow_overlap = true;
    assert_eq!(search_internal(text, b"abab", &config), vec![0, 2, 4]);
}

#[test]
fn test_suffix_index_end_to_end() {
    let text = b"to be or not to be that is the question";
    let index = SuffixIndex::build(text);

    assert_eq!(index.find_all(b"to be"), vec![0, 13]);
    assert_eq!(index.find_all(b"to be"), kmp::search(text, b"to be"));
    assert_eq!(index.count(b"t"), 7);

    let longest = index.longest_repeat().unwrap();
    assert_eq!(longest.bytes(index.text()), b"to be ");
    assert_eq!(longest.positions, vec![0, 13]);
}

#[test]
fn test_repeats_are_real_repeats() {
    let mut rng = StdRng::seed_from_u64(2024);
    let text = random_text(&mut rng, 400, 3);
    let index = SuffixIndex::build(&text);

    let repeats = index.repeats(3);
    assert!(!repeats.is_empty());
    for repeat in &repeats {
        assert!(repeat.length >= 3);
        assert!(repeat.count() >= 2);
        let bytes = repeat.bytes(&text);
        assert_eq!(kmp::search(&text, bytes), repeat.positions);
    }

    // Longest first
    assert!(repeats.windows(2).all(|w| w[0].length >= w[1].length));
}
