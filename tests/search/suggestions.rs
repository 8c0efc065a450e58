//! Suggestion lists built from the grocery fixture.

use super::common::load_catalog;
use shelfsift::{
    filter_suggestions, suggestions, MemoryStore, RecentSearchStore, SearchSuggestion,
    SuggestionKind,
};

fn texts(list: &[SearchSuggestion]) -> Vec<&str> {
    list.iter().map(|s| s.text.as_str()).collect()
}

fn find<'a>(list: &'a [SearchSuggestion], id: &str) -> &'a SearchSuggestion {
    list.iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("no suggestion {id}"))
}

#[test]
fn test_fixture_suggestion_count() {
    let all = suggestions(&load_catalog());
    // 7 products, 4 categories, 10 distinct tags
    assert_eq!(all.len(), 21);
    assert_eq!(all.iter().filter(|s| s.kind == SuggestionKind::Product).count(), 7);
    assert_eq!(all.iter().filter(|s| s.kind == SuggestionKind::Category).count(), 4);
    assert_eq!(all.iter().filter(|s| s.kind == SuggestionKind::Tag).count(), 10);
}

#[test]
fn test_counts_fold_case() {
    let all = suggestions(&load_catalog());
    assert_eq!(find(&all, "category:fruit").count, 3);
    assert_eq!(find(&all, "tag:fresh").count, 3);
    assert_eq!(find(&all, "category:dairy alternatives").count, 2);

    // "vegan" first, "Vegan" folded into it
    let vegan = find(&all, "tag:vegan");
    assert_eq!(vegan.text, "vegan");
    assert_eq!(vegan.count, 2);
}

#[test]
fn test_spelling_variants_are_not_merged() {
    let all = suggestions(&load_catalog());
    for id in ["tag:organic", "tag:organics", "tag:organik"] {
        assert_eq!(find(&all, id).count, 1);
    }
}

#[test]
fn test_first_occurrence_order() {
    let all = suggestions(&load_catalog());
    assert_eq!(
        texts(&all[..5]),
        vec!["Red Apple", "Fruit", "fresh", "Organic", "Green Apple"]
    );
}

#[test]
fn test_ids_are_unique() {
    let all = suggestions(&load_catalog());
    let mut ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn test_filter_by_prefix() {
    let all = suggestions(&load_catalog());
    let hits = filter_suggestions(&all, "apple", 10);
    assert_eq!(texts(&hits), vec!["Red Apple", "Green Apple", "Apple Juice"]);

    let hits = filter_suggestions(&all, "dairy", 1);
    assert_eq!(texts(&hits), vec!["Dairy Alternatives"]);
}

#[test]
fn test_recent_searches_lead_the_dropdown() {
    let mut recent = RecentSearchStore::load(MemoryStore::new(), 5);
    recent.record("apple").unwrap();
    recent.record("oat milk").unwrap();

    let mut all = recent.suggestions();
    all.extend(suggestions(&load_catalog()));

    let hits = filter_suggestions(&all, "milk", 10);
    assert_eq!(hits[0].kind, SuggestionKind::Recent);
    assert_eq!(hits[0].id, "recent:oat milk");
    assert_eq!(hits[1].text, "Oat Milk");
    assert_eq!(hits[1].kind, SuggestionKind::Product);
}

#[test]
fn test_suggestions_serialize_for_the_host() {
    let all = suggestions(&load_catalog());
    let json = serde_json::to_value(&all[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": "category:fruit", "text": "Fruit", "kind": "category", "count": 3})
    );
}
