//! # tabsort
//!
//! A parser and multi-key sorter for bracketed table text.
//!
//! Input of the shape `[[5, 3, 9], ["Apple", "Banana"]]` is parsed into
//! typed tables, each table's elements are reordered by a compound key,
//! the tables themselves are reordered by another compound key, and the
//! result is rendered one table per line.
//!
//! ## Testing
//!
//! Each stage carries its own unit tests; the end-to-end behavior
//! (including the documented invalid-input handling) is covered by the
//! integration suites under `tests/`.

pub mod tables;
