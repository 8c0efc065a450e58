// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Data shapes the engine reads and produces.
//!
//! `Product` arrives from the host application and is never mutated here. Its
//! `tags` field is the messy one: depending on which screen saved the product,
//! it can be a real array, a JSON array serialized into a string, or a plain
//! comma-separated string. `RawTags` captures those three shapes once, at the
//! deserialization boundary, and `tags::normalize_tags` is the only code that
//! ever looks inside.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A catalog entry as supplied by the host application.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Numeric ids are accepted and stored in their decimal form.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(default)]
    pub tags: RawTags,
    /// Scanned or typed in; numeric values are kept in their decimal form.
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "number_or_null")]
    pub stock: f64,
    #[serde(default, deserialize_with = "number_or_null")]
    pub min_stock: f64,
}

// Host records are loosely typed: ids and barcodes arrive as numbers, and
// forms save `null` for fields left blank. None of that should reject a record.

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_or_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// The three shapes a product's tags can arrive in.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "TagsRepr")]
pub enum RawTags {
    /// Already a list of strings.
    List(Vec<String>),
    /// A string that looks like a JSON array: `["organic","vegan"]`.
    Json(String),
    /// A comma-separated string: `organic, vegan`.
    Csv(String),
}

impl RawTags {
    /// Classify a tag string: bracketed text is treated as JSON, anything else
    /// as comma-separated.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            RawTags::Json(text)
        } else {
            RawTags::Csv(text)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RawTags::List(tags) => tags.is_empty(),
            RawTags::Json(text) | RawTags::Csv(text) => text.trim().is_empty(),
        }
    }
}

impl Default for RawTags {
    fn default() -> Self {
        RawTags::List(Vec::new())
    }
}

impl From<Vec<String>> for RawTags {
    fn from(tags: Vec<String>) -> Self {
        RawTags::List(tags)
    }
}

impl From<&[&str]> for RawTags {
    fn from(tags: &[&str]) -> Self {
        RawTags::List(tags.iter().map(|t| (*t).to_string()).collect())
    }
}

impl From<&str> for RawTags {
    fn from(text: &str) -> Self {
        RawTags::from_text(text)
    }
}

/// Wire form of `tags` before classification.
#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<Value>),
    Text(String),
    Other(Value),
}

impl From<TagsRepr> for RawTags {
    fn from(repr: TagsRepr) -> Self {
        match repr {
            // Non-string entries (numbers, nulls, nested objects) are dropped here
            TagsRepr::List(values) => RawTags::List(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            TagsRepr::Text(text) => RawTags::from_text(text),
            TagsRepr::Other(_) => RawTags::default(),
        }
    }
}

/// What a suggestion points at.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Product,
    Category,
    Tag,
    Recent,
}

impl SuggestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Product => "product",
            SuggestionKind::Category => "category",
            SuggestionKind::Tag => "tag",
            SuggestionKind::Recent => "recent",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the search-box dropdown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchSuggestion {
    /// Stable key: `"{kind}:{lower-cased text}"`.
    pub id: String,
    /// Display text, in the casing of its first occurrence.
    pub text: String,
    pub kind: SuggestionKind,
    /// Number of occurrences across the catalog (always at least 1).
    pub count: usize,
}

/// A cluster of near-duplicate tag spellings and the one chosen to represent it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TagCluster {
    pub canonical: String,
    /// Members in the order they appeared in the input; includes `canonical`.
    pub members: Vec<String>,
}
