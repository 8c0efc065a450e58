// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String metrics: how alike are two spellings?
//!
//! Two measures live here. Jaro-Winkler similarity drives both the fuzzy word
//! fallback in the field scorer and the tag clusterer. Levenshtein distance is
//! the classic edit count, plus a bounded variant with early exits for bulk
//! comparisons.
//!
//! Both are pure and deterministic. The formulas are fixed, so a ranking or a
//! canonical tag pick computed today reproduces tomorrow.

mod jaro_winkler;
mod levenshtein;

pub use jaro_winkler::*;
pub use levenshtein::*;
