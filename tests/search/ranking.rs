//! Ranking over the grocery fixture.
//!
//! Expected scores come straight from the field scoring rules: a name hit at
//! char `i` of an `n`-char name scores `100 - i/n * 20`, categories are
//! weighted 0.8, tags 0.6, identifiers score a flat 100.

use super::common::{assert_sorted_by_score, by_name, load_catalog, names};
use shelfsift::{product_score, rank, rank_scored};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_apple_ranks_prefix_hit_first() {
    let products = load_catalog();
    let ranked = rank("apple", &products);
    assert_eq!(names(&ranked), vec!["Apple Juice", "Red Apple", "Green Apple"]);
}

#[test]
fn test_apple_scores() {
    let products = load_catalog();
    let ranked = rank_scored("apple", &products);
    assert_eq!(ranked.len(), 3);
    assert!(approx(ranked[0].1, 100.0));
    assert!(approx(ranked[1].1, 100.0 - 4.0 / 9.0 * 20.0));
    assert!(approx(ranked[2].1, 100.0 - 6.0 / 11.0 * 20.0));
    assert_sorted_by_score(&ranked);
}

#[test]
fn test_query_is_trimmed() {
    let products = load_catalog();
    assert_eq!(
        names(&rank("  apple  ", &products)),
        names(&rank("apple", &products))
    );
}

#[test]
fn test_category_hit_is_weighted() {
    let products = load_catalog();
    let ranked = rank_scored("fruit", &products);
    let hits: Vec<&str> = ranked.iter().map(|(p, _)| p.name.as_str()).collect();
    // All three tie at 0.8 * 100, so catalog order holds
    assert_eq!(hits, vec!["Red Apple", "Green Apple", "Banana"]);
    assert!(ranked.iter().all(|(_, score)| approx(*score, 80.0)));
}

#[test]
fn test_tag_hit_is_weighted() {
    let products = load_catalog();
    let ranked = rank_scored("fresh", &products);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|(_, score)| approx(*score, 60.0)));
}

#[test]
fn test_name_beats_tag() {
    let products = load_catalog();
    let ranked = rank_scored("vegan", &products);
    assert_eq!(ranked[0].0.name, "Vegan Cheese");
    assert!(approx(ranked[0].1, 100.0));
    assert_eq!(ranked[1].0.name, "Oat Milk");
    assert!(approx(ranked[1].1, 60.0));
}

#[test]
fn test_sku_prefix_matches_case_insensitively() {
    let products = load_catalog();
    let ranked = rank("drk", &products);
    assert_eq!(names(&ranked), vec!["Oat Milk", "Apple Juice"]);
}

#[test]
fn test_barcode_prefix_matches_every_product_sharing_it() {
    let products = load_catalog();
    let ranked = rank_scored("40112002969", &products);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|(_, score)| approx(*score, 100.0)));
}

#[test]
fn test_full_barcode_is_unique() {
    let products = load_catalog();
    let ranked = rank("5000112637922", &products);
    assert_eq!(names(&ranked), vec!["Apple Juice"]);
}

#[test]
fn test_misspelled_name_still_found() {
    let products = load_catalog();
    let ranked = rank("bananna", &products);
    assert_eq!(names(&ranked), vec!["Banana"]);

    let ranked = rank("chese", &products);
    assert_eq!(names(&ranked), vec!["Vegan Cheese"]);
}

#[test]
fn test_malformed_json_tags_still_searchable() {
    let products = load_catalog();
    // "[not json, juice]" splits into "[not json" and "juice]"
    let juice = by_name(&products, "Apple Juice");
    assert!(approx(product_score("not json", juice), 100.0 * 0.6 * (1.0 - 1.0 / 9.0 * 0.2)));
}

#[test]
fn test_nothing_matches() {
    let products = load_catalog();
    assert!(rank("xyz", &products).is_empty());
}

#[test]
fn test_blank_query_returns_catalog_unchanged() {
    let products = load_catalog();
    for query in ["", "   ", "\t"] {
        let ranked = rank(query, &products);
        assert_eq!(ranked.len(), products.len());
        for (got, expected) in ranked.iter().zip(products.iter()) {
            assert!(std::ptr::eq(*got, expected));
        }
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let products = load_catalog();
    for query in ["a", "apple", "organic", "dairy"] {
        assert_eq!(
            names(&rank(query, &products)),
            names(&rank(query, &products)),
            "query {query:?}"
        );
    }
}
