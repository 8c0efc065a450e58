// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resolve `RawTags` into an ordered set of tags.

use crate::types::{Product, RawTags};
use crate::utils::fold_case;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Parse any tag representation into trimmed, non-empty, unique tags.
///
/// Order is first-seen. Uniqueness is case-insensitive; the first spelling
/// wins. A bracketed string that is not valid JSON is not an error, it is
/// comma-split like any other string.
pub fn normalize_tags(raw: &RawTags) -> Vec<String> {
    match raw {
        RawTags::List(tags) => dedup_trimmed(tags.iter().map(String::as_str)),
        RawTags::Json(text) => match parse_json_tags(text) {
            Some(tags) => normalize_tags(&RawTags::List(tags)),
            None => {
                debug!(input = %text, "tag string is not a JSON array, splitting on commas");
                split_csv(text)
            }
        },
        RawTags::Csv(text) => split_csv(text),
    }
}

/// All normalized tags of a catalog, deduplicated across products.
pub fn catalog_tags(products: &[Product]) -> Vec<String> {
    let all = products.iter().flat_map(|p| normalize_tags(&p.tags));
    let mut seen = HashSet::new();
    all.filter(|tag| seen.insert(fold_case(tag))).collect()
}

/// Strict parse: only a JSON array is accepted. Non-string elements are skipped.
fn parse_json_tags(text: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Array(values)) => Some(
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

fn split_csv(text: &str) -> Vec<String> {
    dedup_trimmed(text.split(','))
}

fn dedup_trimmed<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(fold_case(tag)))
        .map(str::to_string)
        .collect()
}
