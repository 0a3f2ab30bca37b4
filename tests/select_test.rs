//! Option helper integration tests.

use countrypick::catalog::country::Catalog;
use countrypick::select::option::{
    display_label, render_option, OptionRenderer, SelectOption, DEFAULT_PLACEHOLDER,
};

#[test]
fn test_display_label_examples() {
    assert_eq!(display_label(&SelectOption::new("Indonesia", "ID")), "Indonesia");
    assert_eq!(display_label(&SelectOption::new("", "ID")), DEFAULT_PLACEHOLDER);
}

#[test]
fn test_render_option_examples() {
    let malaysia = SelectOption::new("Malaysia", "MY");
    let turkey = SelectOption::new("Turkey", "TR");

    assert!(render_option(&malaysia, Some(&SelectOption::new("Malaysia", "MY"))).selected);
    assert!(!render_option(&malaysia, Some(&turkey)).selected);
}

#[test]
fn test_catalog_as_options() {
    let options: Vec<SelectOption> = Catalog::builtin().iter().map(SelectOption::from).collect();
    let selected = SelectOption::new("Turkey", "TR");

    let rendered = OptionRenderer::new().render_all(&options, Some(&selected));
    let marked: Vec<&str> = rendered
        .iter()
        .filter(|r| r.selected)
        .map(|r| r.label.as_str())
        .collect();

    assert_eq!(marked, vec!["Turkey"]);
}
