use crate::catalog::country::{Catalog, Country};
use serde::Serialize;

/// Countries whose name contains `search`, ignoring case, in catalog order.
///
/// An empty search matches everything.
pub fn filter_countries<'a>(countries: &'a [Country], search: &str) -> Vec<&'a Country> {
    let needle = search.to_lowercase();

    countries
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

/// Display record for one cell of the country card grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCard<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub flag: &'a str,
}

impl<'a> From<&'a Country> for CountryCard<'a> {
    fn from(country: &'a Country) -> Self {
        Self {
            code: &country.code,
            name: &country.name,
            flag: &country.flag,
        }
    }
}

/// Searchable country picker state.
pub struct CountrySelector<'a, F>
where
    F: FnMut(&Country),
{
    countries: &'a Catalog,
    search: String,
    on_select: F,
}

impl<'a, F> CountrySelector<'a, F>
where
    F: FnMut(&Country),
{
    pub fn new(countries: &'a Catalog, on_select: F) -> Self {
        Self {
            countries,
            search: String::new(),
            on_select,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text as typed.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// The catalog filtered by the current search.
    pub fn filtered(&self) -> Vec<&'a Country> {
        let filtered = filter_countries(self.countries.as_slice(), &self.search);
        tracing::debug!(
            search = %self.search,
            matches = filtered.len(),
            "filtered countries"
        );
        filtered
    }

    /// Card records for the filtered view.
    pub fn cards(&self) -> Vec<CountryCard<'a>> {
        self.filtered().into_iter().map(CountryCard::from).collect()
    }

    /// Hand `country` to the selection callback.
    pub fn activate(&mut self, country: &Country) {
        tracing::debug!(code = %country.code, "country activated");
        (self.on_select)(country);
    }

    /// Activate the `index`th entry of the filtered view.
    pub fn activate_at(&mut self, index: usize) -> bool {
        match self.filtered().get(index).copied() {
            Some(country) => {
                self.activate(country);
                true
            }
            None => false,
        }
    }

    /// Activate the filtered entry with the given code.
    pub fn activate_code(&mut self, code: &str) -> bool {
        let found = self.filtered().into_iter().find(|c| c.code == code);
        match found {
            Some(country) => {
                self.activate(country);
                true
            }
            None => false,
        }
    }
}
