//! Country selector integration tests.

use countrypick::catalog::country::{Catalog, Country};
use countrypick::panel::countryselector::{filter_countries, CountrySelector};

#[test]
fn test_filter_matches_exactly_the_substring_hits() {
    let catalog = Catalog::builtin();

    for search in ["", "a", "IA", "united", "zzz", "Ki"] {
        let filtered = filter_countries(catalog.as_slice(), search);
        let expected: Vec<&Country> = catalog
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&search.to_lowercase()))
            .collect();

        assert_eq!(filtered, expected, "search {:?}", search);
    }
}

#[test]
fn test_empty_search_is_full_catalog() {
    let catalog = Catalog::builtin();
    let panel = CountrySelector::new(catalog, |_: &Country| {});

    assert_eq!(panel.search(), "");
    assert_eq!(panel.filtered().len(), catalog.len());
}

#[test]
fn test_unicode_case_folding() {
    let catalog = Catalog::new(vec![
        Country::new("TR", "Türkiye", "tr.png"),
        Country::new("DE", "Deutschland", "de.png"),
    ]);

    let hits = filter_countries(catalog.as_slice(), "TÜRK");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "TR");
}

#[test]
fn test_selection_is_not_remembered() {
    let catalog = Catalog::builtin();
    let mut count = 0;
    {
        let mut panel = CountrySelector::new(catalog, |_: &Country| count += 1);
        panel.set_search("malaysia");
        assert!(panel.activate_code("MY"));
        assert!(panel.activate_code("MY"));

        // Filter is unchanged by activation
        assert_eq!(panel.search(), "malaysia");
        assert_eq!(panel.filtered().len(), 1);
    }
    assert_eq!(count, 2);
}

#[test]
fn test_activate_outside_filter() {
    let catalog = Catalog::builtin();
    let mut picked = None;
    {
        let mut panel = CountrySelector::new(catalog, |c: &Country| picked = Some(c.clone()));
        panel.set_search("japan");
        assert!(!panel.activate_code("ID"));

        let indonesia = catalog.iter().find(|c| c.code == "ID").unwrap();
        panel.activate(indonesia);
    }
    assert_eq!(picked.map(|c| c.code), Some("ID".to_string()));
}
