//! Base types and error handling.
//!
//! - [`PickerError`](pickererror::PickerError): error codes shared by the cookie, catalog and
//!   harness modules

pub mod pickererror;
