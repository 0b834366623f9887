//! The one evaluation-adjacent error that escapes the `Object::Error`
//! channel: a macro whose body didn't quote anything. Every other runtime
//! failure (type mismatch, unbound identifier, bad builtin arity, ...) is an
//! ordinary `Object::Error` value flowing through the same channel as any
//! other result, per the propagation policy in the evaluator design.

use thiserror::Error;

/// Raised by [`crate::expand_macros`] when a macro body evaluates to
/// something other than a `Quote`. The reference implementation panics
/// here; expansion happens before evaluation proper, so this is the one
/// place a typed, `Result`-propagated error fits better than an `Object`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacroError {
    #[error("macro \"{name}\" did not return a Quote")]
    NonQuoteReturn { name: String },
}
