// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for field scoring and ranking.
//!
//! Scores must be finite, within [0, 100], and deterministic. Ranking must
//! return only positive scores, best first.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shelfsift::{field_score, rank_scored, Product, RawTags};

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    names: Vec<String>,
    tags: String,
    sku: Option<String>,
}

fuzz_target!(|input: RankInput| {
    let query: String = input.query.chars().take(64).collect();
    let products: Vec<Product> = input
        .names
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, name)| Product {
            id: i.to_string(),
            name: name.chars().take(128).collect(),
            tags: RawTags::from_text(input.tags.chars().take(128).collect::<String>()),
            sku: input.sku.clone(),
            ..Product::default()
        })
        .collect();

    for product in &products {
        // INVARIANT 1: bounded and finite
        let score = field_score(&query, &product.name);
        assert!(score.is_finite());
        assert!((0.0..=100.0).contains(&score), "score {} for '{}'", score, query);
    }

    // INVARIANT 2: deterministic
    let first = rank_scored(&query, &products);
    let second = rank_scored(&query, &products);
    assert_eq!(first.len(), second.len());
    for ((a, sa), (b, sb)) in first.iter().zip(second.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(sa, sb);
    }

    // INVARIANT 3: a non-blank query returns positive scores, best first
    if !query.trim().is_empty() {
        assert!(first.iter().all(|(_, s)| *s > 0.0));
        for pair in first.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
});
