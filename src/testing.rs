// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Product, RawTags};

/// A product with only a name.
pub fn make_product(id: usize, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        ..Product::default()
    }
}

/// A product with name, category, and comma-separated tags.
pub fn make_product_full(id: usize, name: &str, category: &str, tags: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        tags: RawTags::from_text(tags),
        ..Product::default()
    }
}

/// A product identified by SKU and barcode.
pub fn make_product_with_ids(id: usize, name: &str, sku: &str, barcode: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        sku: Some(sku.to_string()),
        barcode: Some(barcode.to_string()),
        ..Product::default()
    }
}

/// Products named in order, ids 0..n.
pub fn catalog(names: &[&str]) -> Vec<Product> {
    names
        .iter()
        .enumerate()
        .map(|(id, name)| make_product(id, name))
        .collect()
}

/// Names of ranked products, for compact assertions.
pub fn names<'a>(ranked: &[&'a Product]) -> Vec<&'a str> {
    ranked.iter().map(|p| p.name.as_str()).collect()
}
