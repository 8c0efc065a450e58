// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tag normalization and clustering.
//!
//! Host applications hand us whatever a form saved. Any string, bracketed or
//! not, must normalize without panicking into trimmed, non-empty, unique tags,
//! and clustering those tags must account for every one of them.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shelfsift::{cluster_groups, normalize_tags, RawTags};
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let text: String = text.chars().take(512).collect();

    let tags = normalize_tags(&RawTags::from_text(text));

    let mut seen = HashSet::new();
    for tag in &tags {
        // INVARIANT 1: no blanks, no surrounding whitespace
        assert!(!tag.is_empty());
        assert_eq!(tag.trim(), tag.as_str());
        // INVARIANT 2: unique ignoring case
        assert!(seen.insert(tag.to_lowercase()), "duplicate tag '{}'", tag);
    }

    // INVARIANT 3: clusters partition the input
    let groups = cluster_groups(&tags, 0.7);
    let members: usize = groups.iter().map(|g| g.members.len()).sum();
    assert_eq!(members, tags.len());
    for group in &groups {
        assert!(group.members.contains(&group.canonical));
    }
});
