// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaro-Winkler similarity.
//!
//! Jaro counts characters that match within a sliding window and penalizes the
//! ones that match out of order. Winkler then rewards a shared prefix, which is
//! exactly the shape of retail tag typos: "organic" vs "organics", "choc" vs
//! "chocolate".

use crate::utils::fold_case;

/// Longest shared prefix that earns the Winkler boost.
pub const MAX_PREFIX_BOOST_LEN: usize = 4;

/// Boost weight per shared prefix character.
pub const PREFIX_SCALE: f64 = 0.1;

/// Jaro-Winkler similarity in `[0, 1]`, case-insensitive.
///
/// Empty inputs are defined up front: two empty strings are identical (1.0),
/// an empty string against anything else shares nothing (0.0).
///
/// Argument order is normalized (shorter first, then lexicographic) so the
/// metric is symmetric even where greedy window matching is not.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = fold_case(a);
    let b = fold_case(b);

    if a.is_empty() || b.is_empty() {
        return if a.is_empty() && b.is_empty() { 1.0 } else { 0.0 };
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (a, b) = if (a.len(), &a) <= (b.len(), &b) {
        (a, b)
    } else {
        (b, a)
    };

    let jaro = jaro(&a, &b);
    if jaro == 0.0 {
        return 0.0;
    }

    let prefix = a
        .iter()
        .zip(b.iter())
        .take(MAX_PREFIX_BOOST_LEN)
        .take_while(|(ca, cb)| ca == cb)
        .count();

    jaro + prefix as f64 * PREFIX_SCALE * (1.0 - jaro)
}

/// Plain Jaro similarity over pre-folded character slices.
fn jaro(a: &[char], b: &[char]) -> f64 {
    // floor(max/2) - 1, saturating so one-character strings can still match
    let window = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched sequences in order; every disagreement is half a transposition
    let b_in_order = b
        .iter()
        .zip(b_matched.iter())
        .filter_map(|(c, &hit)| hit.then_some(c));
    let a_in_order = a
        .iter()
        .zip(a_matched.iter())
        .filter_map(|(c, &hit)| hit.then_some(c));
    let out_of_order = a_in_order
        .zip(b_in_order)
        .filter(|(ca, cb)| ca != cb)
        .count();

    let m = matches as f64;
    let t = out_of_order as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}
