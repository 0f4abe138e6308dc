//! Lexer for bracketed table text
//!
//! This module provides the raw tokenization using the logos lexer
//! library. This is the entry point where source strings become token
//! streams.
//!
//! Tokens carry the byte range of their source text. The parser uses the
//! range both to slice chunk text out of the source and to report the
//! position of unbalanced brackets.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;

/// Tokenize source text with location information
///
/// Returns tokens paired with their source byte ranges. The token set
/// covers every input character, so no input is ever rejected here;
/// structural validation happens in the parser.
pub fn tokenize(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
