//! Tokenizer for the Monkey language.
//!
//! The lexer turns source text into a stream of [`monkey_token::Token`]s. It
//! is organized the way the rest of this workspace splits lexer
//! implementations: a core dispatch loop plus one module per scanning
//! concern (identifiers, numbers, strings, operators).
//!
//! The lexer never fails outright — anything it cannot recognize becomes an
//! `ILLEGAL` token carrying the offending character, and it is up to the
//! parser to turn that into a reported error.

mod lexer;

pub use lexer::Lexer;
