//! Abstract syntax tree for the Monkey language.
//!
//! Two tagged-variant categories — [`Statement`] and [`Expression`] — plus a
//! [`Program`] (an ordered list of top-level statements). Every node can
//! reconstruct itself as canonical source text via `to_string()` (the `Node`
//! capability spec.md describes); this is what tests use to check operator
//! precedence and what the macro system uses to display `Quote` objects.
//!
//! The generic [`modify::modify`] visitor rewrites every child slot of every
//! node post-order; it is the engine the macro subsystem in `monkey-eval`
//! builds on.

mod expression;
mod modify;
mod statement;

pub use expression::{
    ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, HashLiteral,
    Identifier, IfExpression, IndexExpression, InfixExpression, IntegerLiteral, MacroLiteral,
    PrefixExpression, StringLiteral,
};
pub use modify::{modify, ModifierFn};
pub use statement::{
    BlockStatement, ExpressionStatement, LetStatement, Program, ReturnStatement, Statement,
};

/// Shared capability: every AST node can render itself as Monkey source.
pub trait Node {
    fn to_string(&self) -> String;
}
