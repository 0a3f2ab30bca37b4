//! Children input harness.
//!
//! A page-level owner of form state. The current state is handed to a child input
//! ([`ChildInput`](childinput::ChildInput)); whatever the child reports replaces the state
//! wholesale and is echoed to the `countrypick::harness` tracing target.
//!
//! Changes overwrite rather than merge: reporting `{"a": 1}` then `{"b": 2}` leaves
//! `{"b": 2}`. Children that edit one field of a larger form must report the whole form.

pub mod childinput;
pub mod formharness;
