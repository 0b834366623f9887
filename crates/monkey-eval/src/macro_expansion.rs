//! The two-pass macro subsystem: `define_macros` strips `let NAME =
//! macro(...) {...}` definitions out of a program and binds them in the
//! environment; `expand_macros` then rewrites every remaining macro call
//! site with whatever its body quoted.

use std::io::Write;
use std::rc::Rc;

use monkey_ast::{modify, CallExpression, Expression, LetStatement, Program, Statement};
use monkey_object::{Environment, Macro, Object};

use crate::eval::eval_block;
use crate::error::MacroError;

/// Removes every top-level `let NAME = macro(...) {...}` statement from
/// `program`, binding each as an `Object::Macro` in `env` as a side effect.
/// Macro definitions are collected before any expansion or evaluation runs,
/// so a macro may be called anywhere in the program regardless of where
/// relative to its own definition — only nesting order among macro
/// definitions themselves would matter, and this pass does not recurse into
/// blocks, matching the reference definition pass.
pub fn define_macros(program: Program, env: &Rc<Environment>) -> Program {
    let mut remaining = Vec::with_capacity(program.statements.len());
    for stmt in program.statements {
        match stmt {
            Statement::Let(LetStatement {
                name,
                value: Expression::Macro(lit),
            }) => {
                env.set(
                    name.name,
                    Rc::new(Object::Macro(Macro {
                        parameters: lit.parameters,
                        body: lit.body,
                        env: env.clone(),
                    })),
                );
            }
            other => remaining.push(other),
        }
    }
    Program {
        statements: remaining,
    }
}

/// Rewrites every macro call in `program` with the AST fragment its body
/// quoted. Fails if any macro body evaluates to something other than a
/// `Quote` — expansion happens before evaluation proper, so there is no
/// sensible runtime `Object::Error` to thread through instead.
pub fn expand_macros(
    program: Program,
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Result<Program, MacroError> {
    let mut error: Option<MacroError> = None;
    let mut expand = |expr: Expression| -> Expression {
        if error.is_some() {
            return expr;
        }
        let Expression::Call(call) = &expr else {
            return expr;
        };
        let Some(name) = macro_callee_name(call) else {
            return expr;
        };
        let Some(macro_obj) = env.get(&name).filter(|o| matches!(o.as_ref(), Object::Macro(_))) else {
            return expr;
        };
        match expand_call(call, &macro_obj, &name, out) {
            Ok(replacement) => replacement,
            Err(e) => {
                error = Some(e);
                expr
            }
        }
    };
    let expanded = modify(program, &mut expand);
    match error {
        Some(e) => {
            tracing::warn!(error = %e, "macro expansion failed");
            Err(e)
        }
        None => Ok(expanded),
    }
}

fn macro_callee_name(call: &CallExpression) -> Option<String> {
    match call.function.as_ref() {
        Expression::Identifier(ident) => Some(ident.name.clone()),
        _ => None,
    }
}

fn expand_call(
    call: &CallExpression,
    macro_obj: &Rc<Object>,
    name: &str,
    out: &mut dyn Write,
) -> Result<Expression, MacroError> {
    let Object::Macro(m) = macro_obj.as_ref() else {
        unreachable!("caller only passes Object::Macro values");
    };
    let extended_env = Environment::new_enclosed(m.env.clone());
    for (param, arg) in m.parameters.iter().zip(&call.arguments) {
        extended_env.set(param.name.clone(), Rc::new(Object::Quote(arg.clone())));
    }
    let evaluated = eval_block(&m.body, &extended_env, out);
    match evaluated.as_ref() {
        Object::Quote(node) => Ok(node.clone()),
        _ => Err(MacroError::NonQuoteReturn {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_ast::Node;
    use monkey_parser::parse;

    fn parse_ok(source: &str) -> Program {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "parse errors: {errors:?}");
        program
    }

    #[test]
    fn define_macros_strips_the_definition_and_binds_it() {
        let program = parse_ok("let number = macro() { quote(5) }; number()");
        let env = Environment::new();
        let program = define_macros(program, &env);
        assert_eq!(program.statements.len(), 1);
        assert!(matches!(env.get("number").as_deref(), Some(Object::Macro(_))));
    }

    #[test]
    fn expand_macros_rewrites_the_call_with_the_quoted_body() {
        let program = parse_ok("let number = macro() { quote(5) }; number()");
        let env = Environment::new();
        let program = define_macros(program, &env);
        let mut out = Vec::new();
        let expanded = expand_macros(program, &env, &mut out).expect("macro returns a quote");
        assert_eq!(expanded.to_string(), "5");
    }

    #[test]
    fn unquote_inside_a_macro_body_sees_the_quoted_call_arguments() {
        let program = parse_ok(
            "let reverse = macro(a, b) { quote(unquote(b) - unquote(a)) }; reverse(2 + 2, 10 - 5)",
        );
        let env = Environment::new();
        let program = define_macros(program, &env);
        let mut out = Vec::new();
        let expanded = expand_macros(program, &env, &mut out).expect("macro returns a quote");
        assert_eq!(expanded.to_string(), "((10 - 5) - (2 + 2))");
    }

    #[test]
    fn macro_body_that_does_not_quote_is_a_typed_error() {
        let program = parse_ok("let oops = macro() { 5 }; oops()");
        let env = Environment::new();
        let program = define_macros(program, &env);
        let mut out = Vec::new();
        let result = expand_macros(program, &env, &mut out);
        assert_eq!(
            result,
            Err(MacroError::NonQuoteReturn {
                name: "oops".to_string()
            })
        );
    }
}
