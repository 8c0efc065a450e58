// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Three knobs, all optional in the JSON file:
//!
//! ```json
//! { "recentMaxEntries": 10, "clusterThreshold": 0.7, "suggestionLimit": 8 }
//! ```

use crate::error::ConfigError;
use crate::tags::{TagClusterer, DEFAULT_CLUSTER_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default cap on the recent-search list.
pub const DEFAULT_RECENT_MAX_ENTRIES: usize = 10;

/// Default number of suggestions shown in the dropdown.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub recent_max_entries: usize,
    pub cluster_threshold: f64,
    pub suggestion_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recent_max_entries: DEFAULT_RECENT_MAX_ENTRIES,
            cluster_threshold: DEFAULT_CLUSTER_THRESHOLD,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Read and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_max_entries == 0 {
            return Err(ConfigError::ZeroRecentEntries);
        }
        if !(0.0..=1.0).contains(&self.cluster_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.cluster_threshold));
        }
        Ok(())
    }

    pub fn clusterer(&self) -> TagClusterer {
        TagClusterer::new(self.cluster_threshold)
    }
}
