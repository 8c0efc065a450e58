// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-box suggestions built from the catalog.
//!
//! Every product contributes its name, its category, and each normalized tag.
//! Entries are keyed by kind plus lower-cased text, so "Fruit" the category
//! and "fruit" the tag are separate suggestions, while "Fruit" and "fruit" as
//! categories fold into one with a count of 2.
//!
//! Output order is first occurrence. Sorting by count is the caller's call.

use crate::tags::normalize_tags;
use crate::types::{Product, SearchSuggestion, SuggestionKind};
use crate::utils::{fold_case, is_blank};
use std::collections::HashMap;

/// Build suggestion entries for a catalog snapshot.
pub fn suggestions(products: &[Product]) -> Vec<SearchSuggestion> {
    let mut builder = SuggestionBuilder::default();
    for product in products {
        builder.add(SuggestionKind::Product, &product.name);
        builder.add(SuggestionKind::Category, &product.category);
        for tag in normalize_tags(&product.tags) {
            builder.add(SuggestionKind::Tag, &tag);
        }
    }
    builder.finish()
}

/// Keep suggestions whose text contains `prefix` (case-insensitive), in order,
/// at most `limit` of them. A blank prefix keeps everything up to `limit`.
pub fn filter_suggestions(
    suggestions: &[SearchSuggestion],
    prefix: &str,
    limit: usize,
) -> Vec<SearchSuggestion> {
    let needle = fold_case(prefix.trim());
    suggestions
        .iter()
        .filter(|s| needle.is_empty() || fold_case(&s.text).contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

/// Stable id for a suggestion.
pub fn suggestion_id(kind: SuggestionKind, text: &str) -> String {
    format!("{}:{}", kind, fold_case(text.trim()))
}

/// Insertion-ordered fold of `(kind, text)` occurrences.
#[derive(Default)]
struct SuggestionBuilder {
    entries: Vec<SearchSuggestion>,
    positions: HashMap<(SuggestionKind, String), usize>,
}

impl SuggestionBuilder {
    fn add(&mut self, kind: SuggestionKind, text: &str) {
        if is_blank(text) {
            return;
        }
        let text = text.trim();
        let key = (kind, fold_case(text));
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push(SearchSuggestion {
                    id: suggestion_id(kind, text),
                    text: text.to_string(),
                    kind,
                    count: 1,
                });
            }
        }
    }

    fn finish(self) -> Vec<SearchSuggestion> {
        self.entries
    }
}
