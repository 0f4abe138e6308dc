//! Table and table-set sequence types
//!
//! A `Table` is an ordered, never-empty sequence of elements parsed from
//! one bracketed group; a `TableSet` is the ordered sequence of all
//! tables from one input. Both are plain immutable values once built.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::tables::model::Element;

/// An ordered, non-empty sequence of typed elements.
///
/// The non-empty invariant is enforced at construction: a bracketed
/// group whose tokens all reduce to nothing yields no table at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    elements: Vec<Element>,
}

impl Table {
    /// Build a table from parsed elements, in their original order.
    /// Returns `None` for an empty element list.
    pub fn from_elements(elements: Vec<Element>) -> Option<Self> {
        if elements.is_empty() {
            None
        } else {
            Some(Table { elements })
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Sum of each element's weight: numeric value for numerics,
    /// character length for text. Finite by the `Element` float invariant.
    pub fn weight_sum(&self) -> f64 {
        self.elements.iter().map(Element::weight).sum()
    }

    /// Canonical display string: the comma-joined natural display forms
    /// of the elements. Used as the final table-ordering tie-break.
    pub fn join_key(&self) -> String {
        self.elements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// A copy of this table with its elements reordered by `compare`.
    /// The sort is stable, so equal elements keep their input order.
    pub(crate) fn reordered(
        &self,
        compare: impl FnMut(&Element, &Element) -> Ordering,
    ) -> Table {
        let mut elements = self.elements.clone();
        elements.sort_by(compare);
        Table { elements }
    }
}

/// The ordered sequence of all tables parsed from one input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableSet {
    tables: Vec<Table>,
}

impl TableSet {
    pub fn new() -> Self {
        TableSet::default()
    }

    pub fn from_tables(tables: Vec<Table>) -> Self {
        TableSet { tables }
    }

    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
