// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shelfsift command-line interface.
//!
//! Four subcommands over a catalog exported as a JSON array of products:
//! `search` ranks it, `suggest` lists dropdown entries, `tags` runs the
//! canonicalization report, and `recent` manages the recent-search list in a
//! JSON state file.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the recent-search state file.
pub const DEFAULT_STORE_PATH: &str = "shelfsift-state.json";

#[derive(Parser)]
#[command(
    name = "shelfsift",
    about = "Fuzzy product search and tag canonicalization",
    version
)]
pub struct Cli {
    /// Engine config file (JSON). Missing keys fall back to defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a catalog against a query
    Search {
        /// Catalog file: JSON array of products
        catalog: PathBuf,

        /// Search query (empty lists the catalog unfiltered)
        query: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Record the query in this recent-search state file
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// List search suggestions built from a catalog
    Suggest {
        /// Catalog file: JSON array of products
        catalog: PathBuf,

        /// Only show suggestions containing this text
        #[arg(short, long)]
        prefix: Option<String>,

        /// Maximum number of suggestions (defaults to the config's suggestionLimit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Prepend recent searches from this state file
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Normalize every tag in a catalog and report near-duplicate clusters
    Tags {
        /// Catalog file: JSON array of products
        catalog: PathBuf,

        /// Similarity a tag needs to join a cluster (overrides config)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Manage the recent-search list
    Recent {
        /// State file holding the list
        #[arg(long, default_value = DEFAULT_STORE_PATH)]
        store: PathBuf,

        #[command(subcommand)]
        action: RecentAction,
    },
}

#[derive(Subcommand)]
pub enum RecentAction {
    /// Record a query
    Add {
        query: String,
    },
    /// Print the list, most recent first
    List,
    /// Empty the list
    Clear,
}
