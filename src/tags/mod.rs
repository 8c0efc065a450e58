// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag hygiene: parse whatever shape the tags came in, then fold spellings.
//!
//! `normalize` turns `RawTags` into a clean, ordered, deduplicated list.
//! `cluster` groups near-duplicate spellings ("Organic", "organics",
//! "Organik") and picks one canonical tag per group. Clustering is quadratic
//! in the vocabulary size and meant for maintenance runs, not keystrokes.

mod cluster;
mod normalize;

pub use cluster::*;
pub use normalize::*;
