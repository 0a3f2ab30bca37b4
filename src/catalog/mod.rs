//! Static country catalog.
//!
//! The catalog is a read-only list of [`Country`](country::Country) records. It offers
//! enumeration only; search belongs to [`crate::panel`].
//!
//! ```rust
//! use countrypick::catalog::country::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.iter().any(|c| c.code == "ID"));
//! ```

pub mod country;
