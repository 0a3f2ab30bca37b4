//! # countrypick
//!
//! Headless state and logic for searchable country pickers.
//!
//! `countrypick` models the pieces of a client-side picker page without any rendering:
//! cookie helpers over an injectable document cookie store, a static country catalog, a
//! search-filtered selector panel, `{title, value}` option render helpers and a form-state
//! harness for child inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use countrypick::catalog::country::{Catalog, Country};
//! use countrypick::cookies::accessor::CookieAccessor;
//! use countrypick::cookies::store::MemoryCookieStore;
//! use countrypick::panel::countryselector::CountrySelector;
//!
//! let cookies = CookieAccessor::new(MemoryCookieStore::new());
//! let mut panel = CountrySelector::new(Catalog::builtin(), |c: &Country| {
//!     cookies.set("country", &c.code, Some(30));
//! });
//!
//! panel.set_search("indo");
//! panel.activate_at(0);
//! drop(panel);
//!
//! assert_eq!(cookies.get("country"), "ID");
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - Cookie store abstraction and get/set/delete accessor
//! - [`catalog`] - Static country list
//! - [`select`] - Option label and selection helpers
//! - [`panel`] - Country selector state
//! - [`harness`] - Form state owner for child inputs

pub mod base;
pub mod catalog;
pub mod cookies;
pub mod harness;
pub mod panel;
pub mod select;
