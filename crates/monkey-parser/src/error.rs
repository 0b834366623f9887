//! Structured parse errors. Every variant's `Display` text is load-bearing:
//! it is what `monkey-repl` prints and what tests assert against.

use monkey_token::TokenKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got} instead.")]
    ExpectedNextToken {
        expected: TokenKind,
        got: TokenKind,
    },

    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },

    #[error("could not parse \"{literal}\" as integer")]
    InvalidInteger { literal: String },
}
