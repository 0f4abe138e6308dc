//! Typed elements
//!
//! An element is a closed tagged variant chosen by best-effort coercion
//! (integer first, float second, text last). Every consumption site in
//! the sorter and renderer matches exhaustively on the variant, so there
//! is no runtime type probing anywhere downstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One typed value inside a table.
///
/// A `Float` is always finite: coercion rejects NaN and infinities, which
/// keeps every comparison in the sorter total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Element {
    /// Check if this element is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Element::Integer(_) | Element::Float(_))
    }

    /// The numeric value of this element, if it has one.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Element::Integer(value) => Some(*value as f64),
            Element::Float(value) => Some(*value),
            Element::Text(_) => None,
        }
    }

    /// Primary element-ordering key: character length for text, 0 for
    /// numerics. This groups all numeric elements ahead of all text
    /// elements, since a retained text element is never empty.
    pub fn length_key(&self) -> usize {
        match self {
            Element::Integer(_) | Element::Float(_) => 0,
            Element::Text(value) => value.chars().count(),
        }
    }

    /// The element's contribution to its table's weight sum: the numeric
    /// value for numerics, the character length for text.
    pub fn weight(&self) -> f64 {
        match self {
            Element::Integer(value) => *value as f64,
            Element::Float(value) => *value,
            Element::Text(value) => value.chars().count() as f64,
        }
    }
}

/// Natural display form: numbers as they format natively, text verbatim
/// and unquoted. This is the form joined into a table's canonical display
/// string; the quoted presentation form lives in [render](crate::tables::render).
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(value) => write!(f, "{}", value),
            Element::Float(value) => write!(f, "{}", value),
            Element::Text(value) => write!(f, "{}", value),
        }
    }
}
