//! Parser for bracketed table text
//!
//! Grouping is driven by an explicit bracket-depth stack over the token
//! stream. `[` opens a group, `]` closes the most recent open group, and
//! the raw text between them, split on commas, becomes that group's
//! element tokens. Tokens outside any group are ignored.
//!
//! In the documented input shape `[[e1, e2], [e3, e4]]` the inner groups
//! close first and become the tables, in appearance order; the outer
//! wrapper is left holding only separator commas and is discarded as
//! empty. Deeper nesting degrades the same way (innermost groups first)
//! without ever failing.
//!
//! Coercion is best-effort with a fixed priority: base-10 integer, then
//! finite float, then non-empty text. Tokens that trim to nothing
//! produce no element, and a group whose tokens all vanish produces no
//! table.

use tracing::debug;

use crate::tables::error::ParseError;
use crate::tables::lexer::{tokenize, Token};
use crate::tables::model::{Element, Table, TableSet};

/// One group opened by a `[` that has not yet seen its `]`.
struct OpenGroup {
    /// Byte position of the opening bracket, for error reporting
    start: usize,
    /// Raw element tokens completed by a comma
    raw_tokens: Vec<String>,
    /// Text accumulated since the last comma (or the opening bracket)
    current: String,
}

impl OpenGroup {
    fn new(start: usize) -> Self {
        OpenGroup {
            start,
            raw_tokens: Vec::new(),
            current: String::new(),
        }
    }

    fn end_token(&mut self) {
        self.raw_tokens.push(std::mem::take(&mut self.current));
    }

    fn finish(mut self) -> Vec<String> {
        self.end_token();
        self.raw_tokens
    }
}

/// Parse source text into an ordered sequence of typed tables.
///
/// Groups are appended in completion order, which for the documented
/// non-nested sibling shape equals their appearance order in the input.
/// Unbalanced brackets fail the whole parse; no partial result is ever
/// returned. An input without bracket groups parses successfully to an
/// empty set, which callers must treat as invalid input.
pub fn parse(input: &str) -> Result<TableSet, ParseError> {
    let mut stack: Vec<OpenGroup> = Vec::new();
    let mut tables = TableSet::new();

    for (token, span) in tokenize(input) {
        match token {
            Token::Open => stack.push(OpenGroup::new(span.start)),
            Token::Close => {
                let group = stack
                    .pop()
                    .ok_or(ParseError::UnexpectedClose { position: span.start })?;
                if let Some(table) = build_table(group.finish()) {
                    tables.push(table);
                }
            }
            Token::Comma => {
                if let Some(group) = stack.last_mut() {
                    group.end_token();
                }
            }
            Token::Chunk => {
                if let Some(group) = stack.last_mut() {
                    group.current.push_str(&input[span]);
                }
            }
        }
    }

    if let Some(group) = stack.first() {
        return Err(ParseError::Unclosed {
            position: group.start,
        });
    }

    debug!(tables = tables.len(), "parsed input");
    Ok(tables)
}

/// Coerce a group's raw tokens and keep the result only if any survive.
fn build_table(raw_tokens: Vec<String>) -> Option<Table> {
    let elements: Vec<Element> = raw_tokens.iter().filter_map(|raw| coerce(raw)).collect();
    Table::from_elements(elements)
}

/// Strip surrounding whitespace and quote characters from a raw token.
/// One combined trim set, applied greedily from both ends, so `' "a" '`
/// reduces to `a`.
fn trim_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"')
}

/// Best-effort coercion: Integer, then Float, then Text.
///
/// Integers that overflow `i64` fall through to float. Floats that
/// parse to NaN or infinity (numeric-looking but out of range) fall
/// through to text, so every retained float is finite. Tokens that trim
/// to nothing produce no element.
fn coerce(raw: &str) -> Option<Element> {
    let trimmed = trim_token(raw);
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(Element::Integer(value));
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            return Some(Element::Float(value));
        }
    }
    Some(Element::Text(trimmed.to_string()))
}
