//! Statement-level evaluation: the program/block unwinding difference, and
//! `let`/`return`/bare-expression dispatch.

use std::io::Write;
use std::rc::Rc;

use monkey_ast::{BlockStatement, Program, Statement};
use monkey_object::{null, Environment, Object};

use super::expression::eval_expression;

/// Evaluates a top-level program. The result is the last statement's value;
/// a `return` unwinds all the way out and is unwrapped; an `Error`
/// short-circuits immediately.
pub fn evaluate(program: &Program, env: &Rc<Environment>, out: &mut dyn Write) -> Rc<Object> {
    tracing::debug!(statements = program.statements.len(), "evaluating program");
    let mut result = null();
    for statement in &program.statements {
        result = eval_statement(statement, env, out);
        match result.as_ref() {
            Object::ReturnValue(value) => return value.clone(),
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// Evaluates a `{ ... }` block without unwrapping `ReturnValue` — the
/// enclosing function call (or the top-level program) is what decides
/// whether an unwind should stop here or keep propagating.
pub(crate) fn eval_block(
    block: &BlockStatement,
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Rc<Object> {
    let mut result = null();
    for statement in &block.statements {
        result = eval_statement(statement, env, out);
        if matches!(result.as_ref(), Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Rc<Environment>, out: &mut dyn Write) -> Rc<Object> {
    match statement {
        Statement::Let(s) => {
            let value = eval_expression(&s.value, env, out);
            if value.is_error() {
                return value;
            }
            env.set(s.name.name.clone(), value);
            null()
        }
        Statement::Return(s) => {
            let value = eval_expression(&s.value, env, out);
            if value.is_error() {
                return value;
            }
            Rc::new(Object::ReturnValue(value))
        }
        Statement::Expression(s) => eval_expression(&s.expression, env, out),
        Statement::Block(b) => eval_block(b, env, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_parser::parse;

    fn run(source: &str) -> Rc<Object> {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "parse errors: {errors:?}");
        let env = Environment::new();
        let mut out = Vec::new();
        evaluate(&program, &env, &mut out)
    }

    #[test]
    fn let_statement_evaluates_to_null_not_its_value() {
        // A `let` as the last statement shouldn't make the REPL echo the
        // bound value back — matches the classic REPL's silence on `let`.
        assert!(matches!(run("let x = 5;").as_ref(), Object::Null));
    }

    #[test]
    fn nested_return_exits_only_the_enclosing_function() {
        let result = run("if (10 > 1) { if (2 > 1) { return 2; } return 10; }");
        assert!(matches!(result.as_ref(), Object::Integer(2)));
    }

    #[test]
    fn error_short_circuits_the_program() {
        let result = run("5 + true; 10;");
        let Object::Error(msg) = result.as_ref() else {
            panic!("expected error, got {result:?}");
        };
        assert_eq!(msg, "type mismatch: INTEGER + BOOLEAN");
    }
}
