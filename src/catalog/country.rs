use crate::base::pickererror::PickerError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// A selectable country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// Short identifier, e.g. `"ID"`.
    pub code: String,
    /// Display name, e.g. `"Indonesia"`.
    pub name: String,
    /// Flag image reference.
    pub flag: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            flag: flag.into(),
        }
    }
}

const FLAG_BASE_URL: &str = "https://flagcdn.com/w80";

// (code, name)
const BUILTIN_COUNTRIES: &[(&str, &str)] = &[
    ("ID", "Indonesia"),
    ("MY", "Malaysia"),
    ("SG", "Singapore"),
    ("TH", "Thailand"),
    ("PH", "Philippines"),
    ("VN", "Vietnam"),
    ("TR", "Turkey"),
    ("SA", "Saudi Arabia"),
    ("AE", "United Arab Emirates"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("AU", "Australia"),
    ("GB", "United Kingdom"),
    ("US", "United States"),
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(
        BUILTIN_COUNTRIES
            .iter()
            .map(|(code, name)| {
                let flag = format!("{}/{}.png", FLAG_BASE_URL, code.to_ascii_lowercase());
                Country::new(*code, *name, flag)
            })
            .collect(),
    )
});

/// Immutable, ordered list of countries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// The built-in catalog, built once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Load a catalog from a JSON array of `{code, name, flag}` records.
    pub fn from_json_str(json: &str) -> Result<Self, PickerError> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        tracing::debug!(count = countries.len(), "loaded country catalog");
        Ok(Self::new(countries))
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_path(path: &Path) -> Result<Self, PickerError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| PickerError::catalog_io(path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&json)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    pub fn as_slice(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
