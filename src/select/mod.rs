//! Option transform helpers for searchable select inputs.
//!
//! Options are generic `{title, value}` records; anything else a caller attaches rides
//! along untouched in [`SelectOption::extra`](option::SelectOption::extra).

pub mod option;
