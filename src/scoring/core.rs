// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a single field's score.
//!
//! A query earns 0–100 against one text field. Substring hits dominate: the
//! worst multi-character substring hit (99.99% of the way into the field)
//! still scores 80, which is the best a word-level prefix match can do. Fuzzy
//! word matches top out at 40.
//!
//! # Score bands
//!
//! | Match                              | Score            |
//! |------------------------------------|------------------|
//! | Substring, query > 1 char          | 80–100           |
//! | Substring, single-char query       | 80–90            |
//! | Word prefix                        | 80               |
//! | Word contains                      | 60               |
//! | Word similarity > 0.7 (query > 2)  | 28–40            |
//!
//! Field weights are applied by the ranker, not here.

use crate::fuzzy::similarity;
use crate::utils::{char_find, char_len, fold_case};

/// Score for a substring hit at offset 0.
pub const SUBSTRING_BASE_SCORE: f64 = 100.0;

/// How much of the substring score an end-of-field hit gives up.
pub const SUBSTRING_POSITION_PENALTY: f64 = 20.0;

/// Single-character queries start lower so common letters don't swamp results.
pub const SINGLE_CHAR_BASE_SCORE: f64 = 90.0;
pub const SINGLE_CHAR_POSITION_PENALTY: f64 = 10.0;

/// Word-level fallback scores.
pub const WORD_PREFIX_SCORE: f64 = 80.0;
pub const WORD_CONTAINS_SCORE: f64 = 60.0;
pub const WORD_FUZZY_SCALE: f64 = 40.0;

/// Fuzzy word matching needs more than this much similarity...
pub const WORD_FUZZY_MIN_SIMILARITY: f64 = 0.7;
/// ...and a query word longer than this many characters.
pub const WORD_FUZZY_MIN_LEN: usize = 2;

/// Relative weights of each product field.
pub const NAME_WEIGHT: f64 = 1.0;
pub const CATEGORY_WEIGHT: f64 = 0.8;
pub const TAG_WEIGHT: f64 = 0.6;

/// Flat score for an SKU or barcode substring hit. Identifiers are never fuzzy.
pub const IDENTIFIER_SCORE: f64 = 100.0;

/// Score `query` against one text field, case-insensitively.
///
/// Returns 0 when nothing matches, or when either side is empty.
pub fn field_score(query: &str, field: &str) -> f64 {
    let query = fold_case(query);
    let field = fold_case(field);
    if query.is_empty() || field.is_empty() {
        return 0.0;
    }

    if let Some(idx) = char_find(&field, &query) {
        return substring_score(idx, char_len(&field), char_len(&query));
    }

    word_score(&query, &field)
}

/// Substring hit at char offset `idx`: earlier hits score higher.
pub fn substring_score(idx: usize, field_len: usize, query_len: usize) -> f64 {
    let position = if field_len > 0 {
        idx as f64 / field_len as f64
    } else {
        0.0
    };

    if query_len > 1 {
        SUBSTRING_BASE_SCORE - position * SUBSTRING_POSITION_PENALTY
    } else {
        SINGLE_CHAR_BASE_SCORE - position * SINGLE_CHAR_POSITION_PENALTY
    }
}

/// Word-by-word fallback for queries that are not a substring of the field.
///
/// Each query word takes its best score over the field's words; the result is
/// the mean over query words that matched something. Unmatched words are left
/// out of the mean rather than dragging it toward zero.
fn word_score(query: &str, field: &str) -> f64 {
    let field_words: Vec<&str> = field.split_whitespace().collect();

    let (total, matched) = query
        .split_whitespace()
        .map(|word| best_word_score(word, &field_words))
        .filter(|score| *score > 0.0)
        .fold((0.0, 0usize), |(total, n), score| (total + score, n + 1));

    if matched == 0 {
        0.0
    } else {
        total / matched as f64
    }
}

fn best_word_score(query_word: &str, field_words: &[&str]) -> f64 {
    let fuzzy_allowed = char_len(query_word) > WORD_FUZZY_MIN_LEN;

    field_words
        .iter()
        .map(|field_word| {
            if field_word.starts_with(query_word) {
                WORD_PREFIX_SCORE
            } else if field_word.contains(query_word) {
                WORD_CONTAINS_SCORE
            } else if fuzzy_allowed {
                let sim = similarity(query_word, field_word);
                if sim > WORD_FUZZY_MIN_SIMILARITY {
                    sim * WORD_FUZZY_SCALE
                } else {
                    0.0
                }
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max)
}

/// Does `identifier` contain `query`, ignoring case? Used for SKUs.
pub fn identifier_contains_folded(identifier: &str, query: &str) -> bool {
    !query.is_empty() && fold_case(identifier).contains(&fold_case(query))
}

/// Does `identifier` contain `query` exactly? Used for barcodes.
pub fn identifier_contains(identifier: &str, query: &str) -> bool {
    !query.is_empty() && identifier.contains(query)
}
