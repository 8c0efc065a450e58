//! Property tests for the string metrics.
//!
//! Edit distance is checked against `strsim::levenshtein` as an oracle. Our
//! Jaro-Winkler deliberately differs from strsim's (no 0.7 gate on the prefix
//! boost, case-insensitive, order-normalized), so it is checked on invariants
//! instead.

use proptest::prelude::*;
use shelfsift::{edit_distance, similarity, within_edits};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,10}").unwrap()
}

/// Short words over a tiny alphabet, so pairs share characters often.
fn dense_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,8}").unwrap()
}

/// Arbitrary printable text, multi-byte characters included.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\PC{0,12}").unwrap()
}

// ============================================================================
// JARO-WINKLER
// ============================================================================

proptest! {
    #[test]
    fn prop_similarity_reflexive(word in word_strategy()) {
        prop_assert_eq!(similarity(&word, &word), 1.0);
    }

    #[test]
    fn prop_similarity_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn prop_similarity_bounded(a in text_strategy(), b in text_strategy()) {
        let sim = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim), "similarity {} out of range", sim);
    }

    #[test]
    fn prop_similarity_ignores_case(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(
            similarity(&a, &b),
            similarity(&a.to_uppercase(), &b.to_lowercase())
        );
    }

    #[test]
    fn prop_similarity_empty_against_anything_is_zero(word in word_strategy()) {
        prop_assert_eq!(similarity("", &word), 0.0);
        prop_assert_eq!(similarity(&word, ""), 0.0);
    }

    #[test]
    fn prop_dense_pairs_symmetric(a in dense_word_strategy(), b in dense_word_strategy()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }
}

// ============================================================================
// LEVENSHTEIN
// ============================================================================

proptest! {
    #[test]
    fn prop_edit_distance_matches_oracle(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_edit_distance_dense_matches_oracle(
        a in dense_word_strategy(),
        b in dense_word_strategy(),
    ) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_edit_distance_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_edit_distance_triangle(
        a in dense_word_strategy(),
        b in dense_word_strategy(),
        c in dense_word_strategy(),
    ) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    #[test]
    fn prop_within_edits_agrees_with_distance(
        a in dense_word_strategy(),
        b in dense_word_strategy(),
        max in 0usize..=4,
    ) {
        prop_assert_eq!(within_edits(&a, &b, max), edit_distance(&a, &b) <= max);
    }
}
