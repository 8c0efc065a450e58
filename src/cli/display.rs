// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the shelfsift CLI.
//!
//! Boxed sections, score badges colored by band, and tag cluster listings.
//! Colors follow `SHELFSIFT_THEME` ("dark" or "light"), then `COLORFGBG`, then
//! default to dark. `NO_COLOR` and non-TTY stdout turn them off entirely.

use shelfsift::{SearchSuggestion, SuggestionKind, TagCluster};
use std::sync::OnceLock;

/// Width between the box borders.
pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SHELFSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Palette roles. Each maps to a dark and a light RGB value.
#[derive(Debug, Clone, Copy)]
pub enum Role {
    Good,
    Fair,
    Weak,
    Accent,
    Muted,
}

fn rgb(role: Role) -> (u8, u8, u8) {
    match (theme(), role) {
        (Theme::Dark, Role::Good) => (152, 195, 121),
        (Theme::Dark, Role::Fair) => (229, 192, 123),
        (Theme::Dark, Role::Weak) => (224, 108, 117),
        (Theme::Dark, Role::Accent) => (86, 182, 194),
        (Theme::Dark, Role::Muted) => (92, 99, 112),
        (Theme::Light, Role::Good) => (80, 161, 79),
        (Theme::Light, Role::Fair) => (193, 132, 1),
        (Theme::Light, Role::Weak) => (228, 86, 73),
        (Theme::Light, Role::Accent) => (1, 132, 188),
        (Theme::Light, Role::Muted) => (160, 161, 167),
    }
}

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Paint `text` in a palette role, with optional modifiers. Plain when colors are off.
pub fn paint(role: Role, modifiers: &[&str], text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = rgb(role);
    format!(
        "{}\x1b[38;2;{};{};{}m{}{}",
        modifiers.join(""),
        r,
        g,
        b,
        text,
        RESET
    )
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// ┌─ LABEL ───────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", paint(Role::Accent, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}{}",
        border("┌"),
        label_part,
        border(&"─".repeat(remaining)),
        border("┐")
    );
}

/// │ content       │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// └───────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn border(s: &str) -> String {
    paint(Role::Muted, &[], s)
}

/// Score rendered to one decimal, colored by band.
pub fn score_badge(score: f64) -> String {
    let role = if score >= 80.0 {
        Role::Good
    } else if score >= 50.0 {
        Role::Fair
    } else {
        Role::Weak
    };
    paint(role, &[BOLD], &format!("{:>5.1}", score))
}

pub fn kind_badge(kind: SuggestionKind) -> String {
    paint(Role::Accent, &[], &format!("{:<8}", kind.as_str()))
}

/// One ranked result line.
pub fn result_row(position: usize, name: &str, detail: &str, score: f64) {
    let detail = if detail.is_empty() {
        String::new()
    } else {
        format!(" {}", paint(Role::Muted, &[DIM], detail))
    };
    row(&format!(
        "{:>3}. {} {}{}",
        position,
        score_badge(score),
        name,
        detail
    ));
}

pub fn suggestion_row(suggestion: &SearchSuggestion) {
    row(&format!(
        "{} {} {}",
        kind_badge(suggestion.kind),
        suggestion.text,
        paint(Role::Muted, &[DIM], &format!("×{}", suggestion.count))
    ));
}

/// A cluster line: canonical first, merged spellings after.
pub fn cluster_row(cluster: &TagCluster) {
    let merged: Vec<&str> = cluster
        .members
        .iter()
        .map(String::as_str)
        .filter(|m| *m != cluster.canonical)
        .collect();
    if merged.is_empty() {
        row(&paint(Role::Good, &[BOLD], &cluster.canonical));
    } else {
        row(&format!(
            "{} {} {}",
            paint(Role::Good, &[BOLD], &cluster.canonical),
            paint(Role::Muted, &[], "←"),
            merged.join(", ")
        ));
    }
}

/// Print a warning line to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", paint(Role::Fair, &[BOLD], "warning:"), message);
}
