//! Table text processing
//!
//!     This module orchestrates the complete pipeline for bracketed table
//!     text. Processing runs in independent, stateless stages. First the
//!     source text is tokenized into structural tokens, then bracket
//!     groups are collected into typed tables, then tables and their
//!     elements are reordered, and finally the result is rendered.
//!
//! The Processing Pipeline
//!
//!     The pipeline consists of:
//!         1. Tokenization using a logos lexer. See [lexer](lexer).
//!            The token set is deliberately tiny: the two brackets, the
//!            comma, and maximal runs of everything else.
//!
//!         2. Bracket-depth grouping and best-effort coercion. See
//!            [parser](parser). Every `]` closes the most recent open
//!            `[`; the raw tokens between them become one table. Raw
//!            tokens coerce Integer first, Float second, Text last.
//!
//!         3. Multi-key ordering. See [sorter](sorter). Elements are
//!            reordered within each table, then the tables themselves
//!            are reordered. Both phases use stable sorts so that ties
//!            preserve input order.
//!
//!         4. Rendering. See [render](render). One line per table, text
//!            elements quoted, numeric elements in their natural form.
//!
//! Bracket Handling
//!
//!     Grouping is driven by an explicit depth stack rather than pattern
//!     matching over the raw text. This keeps the single documented
//!     nesting level (`[[..], [..]]`, where the outer wrapper reduces to
//!     separators and is discarded) exact, makes unbalanced input a hard
//!     parse error instead of a silently malformed table, and guarantees
//!     deeper nesting degrades to innermost-first grouping without ever
//!     crashing.

pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod sorter;

pub use error::ParseError;
pub use model::{Element, Table, TableSet};
pub use parser::parse;
pub use sorter::sort;
