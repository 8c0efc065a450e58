// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how products get their numbers.
//!
//! `core` scores a query against one field. `ranking` weighs the fields of a
//! product against each other, keeps the best, and sorts the catalog.

mod core;
pub mod ranking;

pub use self::core::*;
