//! Loading the fixture catalog and running the tag report over it.

use super::common::{by_name, load_catalog};
use shelfsift::{catalog_tags, cluster, normalize_tags, rank, Product, RawTags, TagClusterer};

#[test]
fn test_fixture_loads() {
    let products = load_catalog();
    assert_eq!(products.len(), 7);

    // Numeric and string ids both come through as strings
    assert_eq!(products[0].id, "1");
    assert_eq!(products[3].id, "4");

    let milk = by_name(&products, "Oat Milk");
    assert_eq!(milk.barcode, None);
    assert_eq!(milk.stock, 12.0);
    assert_eq!(milk.min_stock, 0.0);
}

#[test]
fn test_fixture_tag_shapes() {
    let products = load_catalog();
    assert!(matches!(products[0].tags, RawTags::List(_)));
    assert!(matches!(products[1].tags, RawTags::Json(_)));
    assert!(matches!(products[2].tags, RawTags::Csv(_)));
    assert!(matches!(products[4].tags, RawTags::Json(_)));
    assert!(products[5].tags.is_empty());
}

#[test]
fn test_fixture_tags_normalize() {
    let products = load_catalog();
    assert_eq!(normalize_tags(&products[0].tags), vec!["fresh", "Organic"]);
    assert_eq!(normalize_tags(&products[1].tags), vec!["fresh", "organics"]);
    assert_eq!(
        normalize_tags(&products[2].tags),
        vec!["fresh", "Organik", "imported"]
    );
    // Bracketed but not JSON: split on commas as-is
    assert_eq!(normalize_tags(&products[4].tags), vec!["[not json", "juice]"]);
    assert!(normalize_tags(&products[5].tags).is_empty());
}

#[test]
fn test_catalog_vocabulary() {
    let products = load_catalog();
    assert_eq!(
        catalog_tags(&products),
        vec![
            "fresh",
            "Organic",
            "organics",
            "Organik",
            "imported",
            "vegan",
            "dairy-free",
            "[not json",
            "juice]",
            "vegans",
        ]
    );
}

#[test]
fn test_catalog_canonical_tags() {
    let products = load_catalog();
    let vocabulary = catalog_tags(&products);
    assert_eq!(
        cluster(&vocabulary, 0.7),
        vec![
            "Organic",
            "[not json",
            "dairy-free",
            "fresh",
            "imported",
            "juice]",
            "vegan",
        ]
    );
}

#[test]
fn test_catalog_groups_by_threshold() {
    let products = load_catalog();
    let vocabulary = catalog_tags(&products);

    let loose = TagClusterer::default().groups(&vocabulary);
    let organic = loose.iter().find(|g| g.canonical == "Organic").unwrap();
    assert_eq!(organic.members, vec!["Organic", "organics", "Organik"]);

    // At 0.95 "Organik" no longer reaches the seed
    let strict = TagClusterer::new(0.95).groups(&vocabulary);
    let organic = strict.iter().find(|g| g.canonical == "Organic").unwrap();
    assert_eq!(organic.members, vec!["Organic", "organics"]);
    assert!(strict.iter().any(|g| g.canonical == "Organik"));
}

#[test]
fn test_canonical_map_over_catalog() {
    let products = load_catalog();
    let vocabulary = catalog_tags(&products);
    let map = TagClusterer::default().canonical_map(&vocabulary);
    let lookup = |tag: &str| {
        map.iter()
            .find(|(t, _)| t == tag)
            .map(|(_, c)| c.as_str())
            .unwrap()
    };
    assert_eq!(lookup("organics"), "Organic");
    assert_eq!(lookup("Organik"), "Organic");
    assert_eq!(lookup("vegans"), "vegan");
    assert_eq!(lookup("fresh"), "fresh");
}

#[test]
fn test_loosely_typed_records_load_and_search() {
    // Numeric identifiers and nulls from blank form fields
    let json = r#"[
        {"id": 1, "name": "Sparkling Water", "category": null, "sku": 12345, "barcode": 4006381333931, "stock": null},
        {"id": 2, "name": null, "category": "Drinks", "tags": "fizzy", "minStock": null}
    ]"#;
    let products: Vec<Product> = serde_json::from_str(json).unwrap();
    assert_eq!(products.len(), 2);

    let by_barcode = rank("4006381333931", &products);
    assert_eq!(by_barcode.len(), 1);
    assert_eq!(by_barcode[0].id, "1");

    let by_sku = rank("2345", &products);
    assert_eq!(by_sku.len(), 1);
    assert_eq!(by_sku[0].name, "Sparkling Water");

    // The unnamed product is still found through its category
    let by_category = rank("drinks", &products);
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, "2");
}
