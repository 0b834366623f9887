//! The generic `Modify` visitor: rewrites every expression node in an AST,
//! post-order, by applying a user-supplied transform at each node after
//! recursing into its children.
//!
//! Monkey's macro subsystem only ever rewrites `Expression` nodes (an
//! `unquote(...)` call becomes a literal, a macro call becomes whatever the
//! macro body quoted) — statements themselves are never replaced wholesale,
//! only the expressions they carry. The visitor is shaped around that: the
//! transform is `FnMut(Expression) -> Expression` (the macro/quote passes
//! evaluate AST fragments as they rewrite them, which needs mutable access
//! to an environment and an output sink), and `modify` walks every
//! statement/expression slot listed in the data model, including both
//! halves of every hash-literal pair and every array element.

use crate::expression::{Expression, Identifier};
use crate::statement::{BlockStatement, Program, Statement};

pub type ModifierFn<'a> = dyn FnMut(Expression) -> Expression + 'a;

/// Rewrites every expression in `program`, recursing post-order.
pub fn modify(program: Program, modifier: &mut ModifierFn) -> Program {
    Program {
        statements: program
            .statements
            .into_iter()
            .map(|s| modify_statement(s, modifier))
            .collect(),
    }
}

fn modify_statement(stmt: Statement, modifier: &mut ModifierFn) -> Statement {
    match stmt {
        Statement::Let(mut s) => {
            s.value = modify_expression(s.value, modifier);
            Statement::Let(s)
        }
        Statement::Return(mut s) => {
            s.value = modify_expression(s.value, modifier);
            Statement::Return(s)
        }
        Statement::Expression(mut s) => {
            s.expression = modify_expression(s.expression, modifier);
            Statement::Expression(s)
        }
        Statement::Block(b) => Statement::Block(modify_block(b, modifier)),
    }
}

fn modify_block(block: BlockStatement, modifier: &mut ModifierFn) -> BlockStatement {
    BlockStatement {
        statements: block
            .statements
            .into_iter()
            .map(|s| modify_statement(s, modifier))
            .collect(),
    }
}

/// Applies `modifier` to `param` by round-tripping it through `Expression`,
/// so identifier positions (function/macro parameter lists) go through the
/// same single transform point as every other node, even though no
/// modifier in this crate currently rewrites identifiers.
fn modify_identifier(param: Identifier, modifier: &mut ModifierFn) -> Identifier {
    match modify_expression(Expression::Identifier(param.clone()), modifier) {
        Expression::Identifier(ident) => ident,
        _ => param,
    }
}

fn modify_expression(expr: Expression, modifier: &mut ModifierFn) -> Expression {
    let recursed = match expr {
        Expression::Infix(mut e) => {
            e.left = Box::new(modify_expression(*e.left, modifier));
            e.right = Box::new(modify_expression(*e.right, modifier));
            Expression::Infix(e)
        }
        Expression::Prefix(mut e) => {
            e.right = Box::new(modify_expression(*e.right, modifier));
            Expression::Prefix(e)
        }
        Expression::Index(mut e) => {
            e.left = Box::new(modify_expression(*e.left, modifier));
            e.index = Box::new(modify_expression(*e.index, modifier));
            Expression::Index(e)
        }
        Expression::If(mut e) => {
            e.condition = Box::new(modify_expression(*e.condition, modifier));
            e.consequence = modify_block(e.consequence, modifier);
            e.alternative = e.alternative.map(|alt| modify_block(alt, modifier));
            Expression::If(e)
        }
        Expression::Function(mut e) => {
            e.parameters = e
                .parameters
                .into_iter()
                .map(|p| modify_identifier(p, modifier))
                .collect();
            e.body = modify_block(e.body, modifier);
            Expression::Function(e)
        }
        Expression::Macro(mut e) => {
            e.parameters = e
                .parameters
                .into_iter()
                .map(|p| modify_identifier(p, modifier))
                .collect();
            e.body = modify_block(e.body, modifier);
            Expression::Macro(e)
        }
        Expression::Call(mut e) => {
            e.function = Box::new(modify_expression(*e.function, modifier));
            e.arguments = e
                .arguments
                .into_iter()
                .map(|a| modify_expression(a, modifier))
                .collect();
            Expression::Call(e)
        }
        Expression::Array(mut e) => {
            e.elements = e
                .elements
                .into_iter()
                .map(|el| modify_expression(el, modifier))
                .collect();
            Expression::Array(e)
        }
        Expression::Hash(mut e) => {
            e.pairs = e
                .pairs
                .into_iter()
                .map(|(k, v)| (modify_expression(k, modifier), modify_expression(v, modifier)))
                .collect();
            Expression::Hash(e)
        }
        // Terminal nodes: nothing to recurse into.
        other @ (Expression::Identifier(_)
        | Expression::IntegerLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::StringLiteral(_)) => other,
    };
    modifier(recursed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{ArrayLiteral, HashLiteral, IntegerLiteral};
    use crate::statement::ExpressionStatement;

    fn one() -> Expression {
        Expression::IntegerLiteral(IntegerLiteral { value: 1 })
    }
    fn two() -> Expression {
        Expression::IntegerLiteral(IntegerLiteral { value: 2 })
    }

    fn turn_one_into_two(expr: Expression) -> Expression {
        match expr {
            Expression::IntegerLiteral(lit) if lit.value == 1 => {
                Expression::IntegerLiteral(IntegerLiteral { value: 2 })
            }
            other => other,
        }
    }

    #[test]
    fn rewrites_array_elements() {
        let program = Program {
            statements: vec![Statement::Expression(ExpressionStatement {
                expression: Expression::Array(ArrayLiteral {
                    elements: vec![one(), one()],
                }),
            })],
        };
        let result = modify(program, &mut turn_one_into_two);
        let Statement::Expression(es) = &result.statements[0] else {
            panic!("expected expression statement");
        };
        let Expression::Array(arr) = &es.expression else {
            panic!("expected array literal");
        };
        assert_eq!(arr.elements, vec![two(), two()]);
    }

    #[test]
    fn rewrites_both_sides_of_hash_pairs() {
        let program = Program {
            statements: vec![Statement::Expression(ExpressionStatement {
                expression: Expression::Hash(HashLiteral {
                    pairs: vec![(one(), one())],
                }),
            })],
        };
        let result = modify(program, &mut turn_one_into_two);
        let Statement::Expression(es) = &result.statements[0] else {
            panic!("expected expression statement");
        };
        let Expression::Hash(h) = &es.expression else {
            panic!("expected hash literal");
        };
        assert_eq!(h.pairs, vec![(two(), two())]);
    }
}
