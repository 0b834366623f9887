//! Pratt parser for the Monkey language.
//!
//! Turns a token stream into a [`monkey_ast::Program`], dispatching on a
//! per-[`monkey_token::TokenKind`] table of prefix/infix handler functions
//! rather than a binding-power scheme — each operator's parsing rule is a
//! standalone, independently testable function. Errors are accumulated
//! rather than raised: a caller inspects [`Parser::errors`] (or the
//! `Vec<ParseError>` returned by [`parse`]) after parsing completes.

mod error;
mod parser;
mod precedence;

pub use error::ParseError;
pub use parser::{parse, Parser};
pub use precedence::Precedence;
