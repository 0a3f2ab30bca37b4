//! Walks through a picker session: search, pick, remember the pick in a cookie and
//! echo a child input's form state.
//!
//! Run with `RUST_LOG=debug cargo run --example country_picker -- [search]`.

use countrypick::catalog::country::{Catalog, Country};
use countrypick::cookies::accessor::CookieAccessor;
use countrypick::cookies::store::MemoryCookieStore;
use countrypick::harness::childinput::FieldInput;
use countrypick::harness::formharness::ChildrenInputHarness;
use countrypick::panel::countryselector::CountrySelector;
use countrypick::select::option::{OptionRenderer, SelectOption};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let search = std::env::args().nth(1).unwrap_or_else(|| "ia".to_string());
    let cookies = CookieAccessor::new(MemoryCookieStore::new());
    let mut picked: Option<Country> = None;

    {
        let mut panel = CountrySelector::new(Catalog::builtin(), |c: &Country| {
            cookies.set("country", &c.code, Some(30));
            picked = Some(c.clone());
        });

        panel.set_search(search.as_str());
        println!("Countries matching {:?}:", panel.search());
        for card in panel.cards() {
            println!("  [{}] {:<22} {}", card.code, card.name, card.flag);
        }

        if !panel.activate_at(0) {
            println!("No match.");
        }
    }

    println!("Cookie country = {:?}", cookies.get("country"));

    let selected = picked.as_ref().map(SelectOption::from);
    let options: Vec<SelectOption> = Catalog::builtin().iter().map(SelectOption::from).collect();
    println!("Options:");
    for rendered in OptionRenderer::new().render_all(&options, selected.as_ref()) {
        println!("  {}", rendered);
    }

    let mut harness = ChildrenInputHarness::new();
    let mut input = FieldInput::new("country");
    if let Some(country) = &picked {
        input.type_text(country.name.clone());
    }
    harness.render_child(&mut input);
    println!("Form data:\n{}", harness.dump());

    cookies.delete("country");
    println!("Cookie after delete = {:?}", cookies.get("country"));
}
