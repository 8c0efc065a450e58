// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Very little in the engine can fail. Scoring, ranking, suggestions, and tag
//! parsing all recover locally. What remains is the persistence handle behind
//! recent searches and loading a config file.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the key-value store behind recent searches.
///
/// Callers should surface this as a warning: the in-memory list is already
/// updated when a write fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is not a JSON object of strings: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failure loading or validating an `EngineConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("recentMaxEntries must be at least 1")]
    ZeroRecentEntries,
    #[error("clusterThreshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
}
