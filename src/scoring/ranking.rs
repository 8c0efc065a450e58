// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog ranking: how products get sorted.
//!
//! A product's score is the best of its weighted field scores, not the sum. A
//! product that mentions the query in its name and in three tags does not beat
//! one with a better name hit. Products scoring 0 are dropped outright.
//!
//! The sort is stable, so equally scored products keep the caller's catalog
//! order. The UI relies on that: two "Apple" products stay in shelf order.

use super::core::{
    field_score, identifier_contains, identifier_contains_folded, CATEGORY_WEIGHT,
    IDENTIFIER_SCORE, NAME_WEIGHT, TAG_WEIGHT,
};
use crate::tags::normalize_tags;
use crate::types::Product;
use crate::utils::is_blank;
use std::cmp::Ordering;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A product paired with its score. Lives only for the duration of a sort.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoredMatch<'a> {
    pub product: &'a Product,
    pub score: f64,
}

/// Best weighted field score of `product` for an already-trimmed `query`.
///
/// Missing fields (no tags, no SKU, no barcode) contribute nothing.
pub fn product_score(query: &str, product: &Product) -> f64 {
    let name = field_score(query, &product.name) * NAME_WEIGHT;
    let category = field_score(query, &product.category) * CATEGORY_WEIGHT;
    let tags = normalize_tags(&product.tags)
        .iter()
        .map(|tag| field_score(query, tag) * TAG_WEIGHT)
        .fold(0.0, f64::max);

    let sku = match &product.sku {
        Some(sku) if identifier_contains_folded(sku, query) => IDENTIFIER_SCORE,
        _ => 0.0,
    };
    // Barcodes are digits; no case folding
    let barcode = match &product.barcode {
        Some(barcode) if identifier_contains(barcode, query) => IDENTIFIER_SCORE,
        _ => 0.0,
    };

    [name, category, tags, sku, barcode]
        .into_iter()
        .fold(0.0, f64::max)
}

/// Order two matches: higher score first. Equal scores compare equal so the
/// stable sort keeps catalog order.
pub(crate) fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Rank a catalog against a free-text query.
///
/// A blank query is "no filter": every product comes back in input order.
/// Otherwise only products with a non-zero score are returned, best first.
pub fn rank<'a>(query: &str, products: &'a [Product]) -> Vec<&'a Product> {
    rank_scored(query, products)
        .into_iter()
        .map(|(product, _)| product)
        .collect()
}

/// Same ordering as [`rank`], with each product's score attached.
///
/// A blank query returns every product with score 0.
pub fn rank_scored<'a>(query: &str, products: &'a [Product]) -> Vec<(&'a Product, f64)> {
    if is_blank(query) {
        return products.iter().map(|p| (p, 0.0)).collect();
    }
    score_and_sort(query.trim(), products)
        .into_iter()
        .map(|m| (m.product, m.score))
        .collect()
}

fn score_and_sort<'a>(query: &str, products: &'a [Product]) -> Vec<ScoredMatch<'a>> {
    let scored = score_all(query, products);
    let mut matches: Vec<ScoredMatch<'a>> =
        scored.into_iter().filter(|m| m.score > 0.0).collect();

    // sort_by is stable: ties keep catalog order
    matches.sort_by(compare_matches);

    debug!(
        query,
        candidates = products.len(),
        matched = matches.len(),
        "ranked catalog"
    );
    matches
}

#[cfg(feature = "parallel")]
fn score_all<'a>(query: &str, products: &'a [Product]) -> Vec<ScoredMatch<'a>> {
    // Indexed collect keeps input order
    products
        .par_iter()
        .map(|product| ScoredMatch {
            product,
            score: product_score(query, product),
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a>(query: &str, products: &'a [Product]) -> Vec<ScoredMatch<'a>> {
    products
        .iter()
        .map(|product| ScoredMatch {
            product,
            score: product_score(query, product),
        })
        .collect()
}
