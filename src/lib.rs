// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy product search and tag canonicalization for retail catalogs.
//!
//! Two jobs share one set of string metrics: ranking a catalog against a
//! free-text query, and folding near-duplicate tag spellings into canonical
//! tags. Everything is synchronous and allocation-local. Give it a catalog
//! slice and a query; get back references into that slice.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │    fuzzy     │────▶│ scoring::core │────▶│ scoring::ranking │
//! │ (similarity, │     │ (field_score) │     │ (rank)           │
//! │  edit_dist)  │     └───────────────┘     └──────────────────┘
//! └──────────────┘                                   ▲
//!        │                                           │
//!        ▼                                           │
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │ tags::cluster│     │     types     │────▶│  tags::normalize │
//! │ (canonical)  │     │ (Product,     │     │  (RawTags → tags)│
//! └──────────────┘     │  RawTags)     │     └──────────────────┘
//!                      └───────────────┘             │
//!                                                    ▼
//! ┌──────────────┐                           ┌──────────────────┐
//! │    recent    │ ◀── KeyValueStore         │     suggest      │
//! └──────────────┘                           └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use shelfsift::{rank, Product};
//!
//! let catalog = vec![
//!     Product { name: "Red Apple".into(), ..Product::default() },
//!     Product { name: "Green Apple".into(), ..Product::default() },
//!     Product { name: "Banana".into(), ..Product::default() },
//! ];
//! let ranked = rank("apple", &catalog);
//! let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Red Apple", "Green Apple"]);
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod recent;
pub mod scoring;
pub mod suggest;
pub mod tags;
pub mod testing;
mod types;
mod utils;

pub use config::EngineConfig;
pub use error::{ConfigError, StoreError};
pub use fuzzy::{edit_distance, similarity, within_edits};
pub use recent::{JsonFileStore, KeyValueStore, MemoryStore, RecentSearchStore, RECENT_SEARCHES_KEY};
pub use scoring::field_score;
pub use scoring::ranking::{product_score, rank, rank_scored};
pub use suggest::{filter_suggestions, suggestions};
pub use tags::{
    canonical_map, catalog_tags, cluster, cluster_groups, normalize_tags, TagClusterer,
    DEFAULT_CLUSTER_THRESHOLD,
};
pub use types::{Product, RawTags, SearchSuggestion, SuggestionKind, TagCluster};
pub use utils::fold_case;
