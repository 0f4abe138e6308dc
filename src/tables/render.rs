//! Presentation rendering
//!
//! Renders a table set back to text, one line per table, in the shape
//! the input came in: `[e1, e2, ...]`. Text elements are quoted and
//! numeric elements keep their natural form, so the two kinds stay
//! unambiguous after reordering.

use crate::tables::model::{Element, Table, TableSet};

/// Render one element in presentation form: text quoted, numbers natural.
pub fn element(element: &Element) -> String {
    match element {
        Element::Text(value) => format!("\"{}\"", value),
        numeric => numeric.to_string(),
    }
}

/// Render one table as `[e1, e2, ...]`.
pub fn table_line(table: &Table) -> String {
    let rendered: Vec<String> = table.elements().iter().map(element).collect();
    format!("[{}]", rendered.join(", "))
}

/// Render a whole set, one line per table.
pub fn table_set(tables: &TableSet) -> String {
    tables
        .tables()
        .iter()
        .map(table_line)
        .collect::<Vec<_>>()
        .join("\n")
}
