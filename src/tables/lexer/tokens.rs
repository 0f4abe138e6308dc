//! Token definitions for bracketed table text
//!
//! The token set is defined with the logos derive macro. It is
//! deliberately tiny: grouping is structural, so only the brackets and
//! the comma matter, and every other character belongs to a chunk of raw
//! element text. The four patterns cover every input character, which
//! means tokenization itself can never fail.

use logos::Logos;

/// All possible tokens in bracketed table text
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Group delimiters
    #[token("[")]
    Open,
    #[token("]")]
    Close,

    // Element separator
    #[token(",")]
    Comma,

    // Raw element text (catch-all for non-structural characters)
    #[regex(r"[^\[\],]+")]
    Chunk,
}

impl Token {
    /// Check if this token opens or closes a group
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::Open | Token::Close)
    }
}
