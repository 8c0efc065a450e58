// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the string metrics.
//!
//! The bounded check must agree with the full DP, distances must be symmetric
//! and at least the length difference, and similarity must stay in [0, 1].

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shelfsift::{edit_distance, similarity, within_edits};

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths (in chars) to keep the DP cheap
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let max = usize::from(input.max % 8);

    let distance = edit_distance(&a, &b);

    // INVARIANT 1: symmetric
    assert_eq!(distance, edit_distance(&b, &a), "a='{}', b='{}'", a, b);

    // INVARIANT 2: the length difference is a lower bound
    let len_diff = a.chars().count().abs_diff(b.chars().count());
    assert!(distance >= len_diff, "a='{}', b='{}'", a, b);

    // INVARIANT 3: early exit never changes the answer
    assert_eq!(
        within_edits(&a, &b, max),
        distance <= max,
        "a='{}', b='{}', max={}",
        a,
        b,
        max
    );

    // INVARIANT 4: similarity is bounded and symmetric
    let sim = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&sim), "similarity {} for a='{}', b='{}'", sim, a, b);
    assert_eq!(sim, similarity(&b, &a));
});
