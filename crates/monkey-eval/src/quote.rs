//! `quote`/`unquote`: lifting an AST fragment to a runtime `Quote` value,
//! with any nested `unquote(...)` calls evaluated and spliced back in
//! before the fragment is frozen.

use std::io::Write;
use std::rc::Rc;

use monkey_ast::{
    modify, BooleanLiteral, CallExpression, Expression, ExpressionStatement, IntegerLiteral,
    Program, Statement,
};
use monkey_object::{Environment, Object};

use crate::eval::eval_expression;

/// Evaluates a `quote(...)` call: the single argument is never evaluated as
/// an expression, only walked for `unquote` splices.
pub(crate) fn eval_quote(
    call: &CallExpression,
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Rc<Object> {
    if call.arguments.len() != 1 {
        return Rc::new(Object::Error(format!(
            "wrong number of arguments to quote. expected=1, got={}",
            call.arguments.len()
        )));
    }
    let node = eval_unquote_calls(call.arguments[0].clone(), env, out);
    Rc::new(Object::Quote(node))
}

fn eval_unquote_calls(node: Expression, env: &Rc<Environment>, out: &mut dyn Write) -> Expression {
    let program = Program {
        statements: vec![Statement::Expression(ExpressionStatement { expression: node })],
    };
    let mut splice = |expr: Expression| -> Expression {
        if !is_unquote_call(&expr) {
            return expr;
        }
        let Expression::Call(call) = &expr else {
            return expr;
        };
        if call.arguments.len() != 1 {
            return expr;
        }
        let evaluated = eval_expression(&call.arguments[0], env, out);
        object_to_ast_node(&evaluated).unwrap_or(expr)
    };
    let modified = modify(program, &mut splice);
    match modified.statements.into_iter().next() {
        Some(Statement::Expression(es)) => es.expression,
        _ => unreachable!("eval_unquote_calls always wraps exactly one ExpressionStatement"),
    }
}

fn is_unquote_call(expr: &Expression) -> bool {
    matches!(expr, Expression::Call(call) if matches!(call.function.as_ref(), Expression::Identifier(ident) if ident.name == "unquote"))
}

/// Converts an evaluated `unquote(...)` result back into an AST fragment.
/// Only `Integer`, `Boolean`, and `Quote` objects have a defined mapping;
/// anything else (arrays, strings, functions, ...) leaves the `unquote`
/// call untouched in the quoted output rather than splicing in garbage.
fn object_to_ast_node(object: &Object) -> Option<Expression> {
    match object {
        Object::Integer(v) => Some(Expression::IntegerLiteral(IntegerLiteral { value: *v })),
        Object::Boolean(v) => Some(Expression::BooleanLiteral(BooleanLiteral { value: *v })),
        Object::Quote(node) => Some(node.clone()),
        _ => None,
    }
}
