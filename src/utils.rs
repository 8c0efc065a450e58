// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string helpers shared by the scorers and the tag pipeline.
//!
//! Everything in the engine compares text case-insensitively but reports
//! positions and lengths in characters, not bytes. A catalog with "Café Crème"
//! in it should score the same as one with "Cafe Creme" at the same offsets.

/// Lower-case a string for comparison.
///
/// Only case is folded. Diacritics and whitespace are left alone because the
/// field scorer measures match offsets against the field as written.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// True when the string is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Character length of a string.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Character index of the first occurrence of `needle` in `haystack`.
///
/// `str::find` returns a byte offset; the scorer needs the char offset so
/// multi-byte prefixes don't inflate the position penalty.
pub fn char_find(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}

/// Case-insensitive equality without allocating when both sides are ASCII.
pub fn eq_fold(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        fold_case(a) == fold_case(b)
    }
}
