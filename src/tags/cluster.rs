// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy single-pass tag clustering.
//!
//! Tags are visited in input order. Each tag not yet absorbed becomes a seed
//! and pulls in every *later* unabsorbed tag whose similarity to the seed
//! reaches the threshold. Members are only ever compared against their seed.
//!
//! # Known limitation
//!
//! This is not transitive. With seed `A`, if `B` joins because it is close to
//! `A`, a later `C` that is close to `B` but not to `A` starts its own cluster.
//! The result also depends on input order. Both are kept on purpose: switching
//! to full transitive closure would silently change which canonical tags an
//! existing catalog resolves to.
//!
//! # Canonical pick
//!
//! Shortest spelling (in characters) wins; ties go to the lexicographically
//! smallest. "Organic" beats "organics" on length; "Organic" beats "organic"
//! on byte order.

use crate::fuzzy::similarity;
use crate::types::TagCluster;
use crate::utils::char_len;
use std::cmp::Ordering;
use tracing::debug;

/// Default similarity a tag needs to join a seed's cluster.
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 0.7;

/// Clusters tags with a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagClusterer {
    threshold: f64,
}

impl Default for TagClusterer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CLUSTER_THRESHOLD,
        }
    }
}

impl TagClusterer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The clusters, in seed order.
    pub fn groups<S: AsRef<str>>(&self, tags: &[S]) -> Vec<TagCluster> {
        cluster_groups(tags, self.threshold)
    }

    /// Canonical tags, sorted.
    pub fn canonical_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
        cluster(tags, self.threshold)
    }

    /// `(tag, canonical)` for every input tag, in input order.
    pub fn canonical_map<S: AsRef<str>>(&self, tags: &[S]) -> Vec<(String, String)> {
        canonical_map(tags, self.threshold)
    }
}

/// Collapse near-duplicate tags and return one canonical tag per cluster,
/// sorted lexicographically.
pub fn cluster<S: AsRef<str>>(tags: &[S], threshold: f64) -> Vec<String> {
    let mut canonicals: Vec<String> = cluster_groups(tags, threshold)
        .into_iter()
        .map(|group| group.canonical)
        .collect();
    canonicals.sort();
    canonicals.dedup();
    canonicals
}

/// Run the greedy pass and return each cluster with its members.
pub fn cluster_groups<S: AsRef<str>>(tags: &[S], threshold: f64) -> Vec<TagCluster> {
    let mut absorbed = vec![false; tags.len()];
    let mut groups = Vec::new();

    for i in 0..tags.len() {
        if absorbed[i] {
            continue;
        }
        absorbed[i] = true;

        let seed = tags[i].as_ref();
        let mut members = vec![seed.to_string()];
        for j in (i + 1)..tags.len() {
            if absorbed[j] {
                continue;
            }
            let candidate = tags[j].as_ref();
            if similarity(seed, candidate) >= threshold {
                absorbed[j] = true;
                members.push(candidate.to_string());
            }
        }

        let canonical = pick_canonical(&members);
        groups.push(TagCluster { canonical, members });
    }

    debug!(
        tags = tags.len(),
        clusters = groups.len(),
        threshold,
        "clustered tag vocabulary"
    );
    groups
}

/// Map every input tag to its cluster's canonical tag.
pub fn canonical_map<S: AsRef<str>>(tags: &[S], threshold: f64) -> Vec<(String, String)> {
    let groups = cluster_groups(tags, threshold);
    tags.iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            groups
                .iter()
                .find(|group| group.members.iter().any(|m| m == tag))
                .map(|group| (tag.to_string(), group.canonical.clone()))
        })
        .collect()
}

fn pick_canonical(members: &[String]) -> String {
    members
        .iter()
        .min_by(|a, b| compare_canonical(a, b))
        .cloned()
        .unwrap_or_default()
}

fn compare_canonical(a: &str, b: &str) -> Ordering {
    char_len(a).cmp(&char_len(b)).then_with(|| a.cmp(b))
}
