//! Cookie helpers over the ambient document cookie string.
//!
//! This module provides:
//!
//! - **Store**: the injectable cookie string ([`CookieStore`](store::CookieStore)), with an
//!   in-memory jar and a store for platforms where cookies are disabled
//! - **Accessor**: `set` / `get` / `delete` by name ([`CookieAccessor`](accessor::CookieAccessor))
//!
//! # Example
//!
//! ```rust
//! use countrypick::cookies::accessor::CookieAccessor;
//! use countrypick::cookies::store::MemoryCookieStore;
//!
//! let cookies = CookieAccessor::new(MemoryCookieStore::new());
//! cookies.set("country", "ID", Some(30));
//! assert_eq!(cookies.get("country"), "ID");
//!
//! cookies.delete("country");
//! assert_eq!(cookies.get("country"), "");
//! ```
//!
//! # Wire format
//!
//! Writes use the standard cookie grammar, e.g.
//! `country=ID; Path=/; Expires=Wed, 21 Oct 2026 07:28:00 GMT`. Values are written as-is;
//! callers must not pass `;`.

pub mod accessor;
pub mod store;
