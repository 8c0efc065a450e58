// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance.
//!
//! `edit_distance` is the plain two-row DP. `within_edits` answers the cheaper
//! question "are these at most `max` edits apart?" and bails out as soon as the
//! answer is known: `|len(a) - len(b)|` is a lower bound on the distance, and
//! once every cell in a DP row exceeds `max` no later row can come back under.

/// Minimum number of single-character insertions, deletions, or substitutions
/// turning `a` into `b`. Counts characters, not bytes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != *bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[b_chars.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Same answer as `edit_distance(a, b) <= max`, without finishing the DP when
/// the outcome is already decided.
pub fn within_edits(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != *bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return false;
        }
    }

    row[b_len] <= max
}
