//! Country selector panel.
//!
//! Holds the live search text, derives the filtered country view on demand and hands
//! activated countries to the caller's `on_select` callback.
//!
//! ```rust
//! use countrypick::catalog::country::{Catalog, Country};
//! use countrypick::panel::countryselector::CountrySelector;
//!
//! let mut chosen = Vec::new();
//! let mut panel = CountrySelector::new(Catalog::builtin(), |c: &Country| {
//!     chosen.push(c.code.clone())
//! });
//!
//! panel.set_search("MAL");
//! assert!(panel.activate_at(0));
//! drop(panel);
//! assert_eq!(chosen, vec!["MY".to_string()]);
//! ```

pub mod countryselector;
