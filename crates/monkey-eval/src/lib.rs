//! Tree-walking evaluator for the Monkey language.
//!
//! Three public entry points, meant to be called in this order against a
//! single `Program`: [`define_macros`] lifts macro definitions out of the
//! program and into an environment, [`expand_macros`] rewrites every macro
//! call site with what its body quoted, and [`evaluate`] walks what's left.
//! `quote`/`unquote` are not separate entry points — they're ordinary
//! identifiers special-cased inside call evaluation, since `quote`'s
//! argument must never be evaluated as a value.

mod builtins;
mod error;
mod eval;
mod macro_expansion;
mod quote;

pub use error::MacroError;
pub use eval::evaluate;
pub use macro_expansion::{define_macros, expand_macros};
