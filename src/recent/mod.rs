// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recent searches: newest first, no duplicates, bounded.
//!
//! The list is persisted as a JSON array of strings under one fixed key. What
//! comes back from storage is not trusted: a missing or malformed value is an
//! empty list, not an error. Writes are different. If persisting fails the
//! caller gets the error (to show a warning); the in-memory list keeps the
//! change and nothing is retried.

mod store;

pub use store::*;

use crate::error::StoreError;
use crate::suggest::suggestion_id;
use crate::types::{SearchSuggestion, SuggestionKind};
use crate::utils::{eq_fold, is_blank};
use tracing::warn;

/// Storage key for the serialized list.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

pub struct RecentSearchStore<S> {
    store: S,
    entries: Vec<String>,
    max_entries: usize,
}

impl<S: KeyValueStore> RecentSearchStore<S> {
    /// Restore the list from `store`, keeping at most `max_entries`.
    pub fn load(store: S, max_entries: usize) -> Self {
        let entries = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => decode_entries(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read recent searches, starting empty");
                Vec::new()
            }
        };

        let mut recent = Self {
            store,
            entries,
            max_entries,
        };
        recent.entries.truncate(max_entries);
        recent
    }

    /// Move `query` to the front, dropping any case-insensitive duplicate and
    /// anything beyond the cap, then persist. Blank queries are ignored.
    pub fn record(&mut self, query: &str) -> Result<(), StoreError> {
        if is_blank(query) {
            return Ok(());
        }
        self.entries.retain(|existing| !eq_fold(existing, query));
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.max_entries);
        self.persist()
    }

    /// Forget everything and persist the empty list.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.persist()
    }

    /// The list, most recent first.
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Recent searches as dropdown entries.
    pub fn suggestions(&self) -> Vec<SearchSuggestion> {
        self.entries
            .iter()
            .map(|query| SearchSuggestion {
                id: suggestion_id(SuggestionKind::Recent, query),
                text: query.clone(),
                kind: SuggestionKind::Recent,
                count: 1,
            })
            .collect()
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn persist(&self) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string(&self.entries).map_err(|source| StoreError::Encode {
                key: RECENT_SEARCHES_KEY.to_string(),
                source,
            })?;
        self.store.set(RECENT_SEARCHES_KEY, &encoded)
    }
}

fn decode_entries(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(entries) => entries.into_iter().filter(|q| !is_blank(q)).collect(),
        Err(e) => {
            warn!(error = %e, "recent searches payload is malformed, starting empty");
            Vec::new()
        }
    }
}
