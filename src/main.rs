// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use shelfsift::{
    catalog_tags, edit_distance, filter_suggestions, fold_case, rank_scored, suggestions,
    within_edits, EngineConfig, JsonFileStore, Product, RecentSearchStore, SearchSuggestion,
    TagClusterer,
};
use std::fs;
use std::path::Path;
use std::time::Instant;

mod cli;
use cli::display;
use cli::{Cli, Commands, RecentAction};

/// Merged spellings this close to their canonical tag are reported as typos.
const TYPO_MAX_EDITS: usize = 2;

fn main() {
    setup_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn setup_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "shelfsift=warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            store,
        } => {
            let products = load_catalog(&catalog)?;
            run_search(&products, &query, limit);
            if let Some(store) = store {
                record_recent(&store, &query, &config);
            }
        }
        Commands::Suggest {
            catalog,
            prefix,
            limit,
            store,
        } => {
            let products = load_catalog(&catalog)?;
            let limit = limit.unwrap_or(config.suggestion_limit);
            let recent = store
                .map(|path| {
                    RecentSearchStore::load(JsonFileStore::new(path), config.recent_max_entries)
                        .suggestions()
                })
                .unwrap_or_default();
            run_suggest(&products, recent, prefix.as_deref().unwrap_or(""), limit);
        }
        Commands::Tags { catalog, threshold } => {
            let products = load_catalog(&catalog)?;
            let threshold = threshold.unwrap_or(config.cluster_threshold);
            let checked = EngineConfig {
                cluster_threshold: threshold,
                ..config.clone()
            };
            checked.validate()?;
            run_tags(&products, checked.clusterer());
        }
        Commands::Recent { store, action } => {
            let mut recent =
                RecentSearchStore::load(JsonFileStore::new(store), config.recent_max_entries);
            match action {
                RecentAction::Add { query } => {
                    recent.record(&query).context("Failed to save recent searches")?;
                }
                RecentAction::Clear => {
                    recent.clear().context("Failed to save recent searches")?;
                }
                RecentAction::List => {}
            }
            display::section_top("RECENT SEARCHES");
            if recent.list().is_empty() {
                display::row("(none)");
            }
            for (i, query) in recent.list().iter().enumerate() {
                display::row(&format!("{:>3}. {}", i + 1, query));
            }
            display::section_bot();
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid catalog JSON in {}", path.display()))
}

fn run_search(products: &[Product], query: &str, limit: usize) {
    let start = Instant::now();
    let ranked = rank_scored(query, products);
    let elapsed = start.elapsed();

    display::section_top(&format!("SEARCH \"{}\"", query));
    if ranked.is_empty() {
        display::row("no matching products");
    }
    for (i, (product, score)) in ranked.iter().take(limit).enumerate() {
        let detail = match (&product.sku, product.category.is_empty()) {
            (Some(sku), _) => format!("{} · {}", product.category, sku),
            (None, false) => product.category.clone(),
            (None, true) => String::new(),
        };
        display::result_row(i + 1, &product.name, &detail, *score);
    }
    display::row(&format!(
        "{} of {} products matched in {:.2?}",
        ranked.len(),
        products.len(),
        elapsed
    ));
    display::section_bot();
}

fn run_suggest(
    products: &[Product],
    recent: Vec<SearchSuggestion>,
    prefix: &str,
    limit: usize,
) {
    let mut all = recent;
    all.extend(suggestions(products));
    let shown = filter_suggestions(&all, prefix, limit);

    display::section_top("SUGGESTIONS");
    if shown.is_empty() {
        display::row("(none)");
    }
    for suggestion in &shown {
        display::suggestion_row(suggestion);
    }
    display::section_bot();
}

fn run_tags(products: &[Product], clusterer: TagClusterer) {
    let vocabulary = catalog_tags(products);

    let start = Instant::now();
    let groups = clusterer.groups(&vocabulary);
    let elapsed = start.elapsed();

    let mut canonical: Vec<&str> = groups.iter().map(|g| g.canonical.as_str()).collect();
    canonical.sort_unstable();
    canonical.dedup();

    display::section_top(&format!("TAG CLUSTERS (threshold {:.2})", clusterer.threshold()));
    for group in groups.iter().filter(|g| g.members.len() > 1) {
        display::cluster_row(group);
        for member in group.members.iter().filter(|m| **m != group.canonical) {
            let from = fold_case(member);
            let to = fold_case(&group.canonical);
            let label = if within_edits(&from, &to, TYPO_MAX_EDITS) {
                "typo"
            } else {
                "variant"
            };
            display::row(&format!(
                "    {} → {} ({}, {} edits)",
                member,
                group.canonical,
                label,
                edit_distance(&from, &to)
            ));
        }
    }
    display::section_bot();

    display::section_top("CANONICAL TAGS");
    display::row(&canonical.join(", "));
    display::row(&format!(
        "{} tags folded into {} in {:.2?}",
        vocabulary.len(),
        canonical.len(),
        elapsed
    ));
    display::section_bot();
}

/// A failed write is a warning, not a failed search.
fn record_recent(path: &Path, query: &str, config: &EngineConfig) {
    let mut recent = RecentSearchStore::load(JsonFileStore::new(path), config.recent_max_entries);
    if let Err(e) = recent.record(query) {
        display::warning(&format!("could not save recent search: {}", e));
    }
}
