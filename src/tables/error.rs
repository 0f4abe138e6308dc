//! Error types for table parsing

use std::fmt;

/// Errors that can occur while grouping bracketed table text.
///
/// Structural errors never yield a partial result: the caller gets the
/// error and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `]` with no open group to close
    UnexpectedClose { position: usize },
    /// Input ended while at least one group was still open
    Unclosed { position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedClose { position } => {
                write!(f, "Unmatched ']' at byte {}", position)
            }
            ParseError::Unclosed { position } => {
                write!(f, "Unclosed '[' at byte {}", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}
