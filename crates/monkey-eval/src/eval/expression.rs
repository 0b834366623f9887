//! Expression-level evaluation: literals, operators, control flow, calls,
//! and the collection types (array/hash index and construction).

use std::io::Write;
use std::rc::Rc;

use indexmap::IndexMap;
use monkey_ast::{CallExpression, Expression, HashLiteral, IfExpression};
use monkey_object::{null, singleton_bool, Environment, Function, Object, ObjectHash};

use super::operators::{eval_infix_expression, eval_prefix_expression};
use super::statement::eval_block;
use crate::builtins;
use crate::quote;

pub(crate) fn eval_expression(
    expr: &Expression,
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Rc<Object> {
    match expr {
        Expression::IntegerLiteral(lit) => Rc::new(Object::Integer(lit.value)),
        Expression::BooleanLiteral(lit) => singleton_bool(lit.value),
        Expression::StringLiteral(lit) => Rc::new(Object::String(lit.value.clone())),
        Expression::Identifier(ident) => eval_identifier(&ident.name, env),
        Expression::Prefix(p) => {
            let right = eval_expression(&p.right, env, out);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&p.operator, &right)
        }
        Expression::Infix(i) => {
            let left = eval_expression(&i.left, env, out);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&i.right, env, out);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&i.operator, &left, &right)
        }
        Expression::If(i) => eval_if_expression(i, env, out),
        Expression::Function(f) => Rc::new(Object::Function(Function {
            parameters: f.parameters.clone(),
            body: f.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(c) if is_quote_call(c) => quote::eval_quote(c, env, out),
        Expression::Call(c) => eval_call_expression(c, env, out),
        Expression::Array(a) => match eval_expression_list(&a.elements, env, out) {
            Ok(elements) => Rc::new(Object::Array(elements)),
            Err(error) => error,
        },
        Expression::Index(idx) => {
            let left = eval_expression(&idx.left, env, out);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(&idx.index, env, out);
            if index.is_error() {
                return index;
            }
            eval_index_expression(&left, &index)
        }
        Expression::Hash(h) => eval_hash_literal(h, env, out),
        // A macro literal that escaped macro definition/expansion (used as
        // a plain expression rather than bound via `let NAME = macro...`)
        // has no runtime representation of its own; the reference
        // evaluator's dispatch has no case for it either and falls
        // through to its zero value, which this mirrors as `Null`.
        Expression::Macro(_) => null(),
    }
}

fn is_quote_call(call: &CallExpression) -> bool {
    matches!(call.function.as_ref(), Expression::Identifier(ident) if ident.name == "quote")
}

fn eval_identifier(name: &str, env: &Rc<Environment>) -> Rc<Object> {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    Rc::new(Object::Error(format!("identifier not found: {name}")))
}

fn eval_if_expression(expr: &IfExpression, env: &Rc<Environment>, out: &mut dyn Write) -> Rc<Object> {
    let condition = eval_expression(&expr.condition, env, out);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block(&expr.consequence, env, out)
    } else if let Some(alternative) = &expr.alternative {
        eval_block(alternative, env, out)
    } else {
        null()
    }
}

/// Evaluates `exprs` left-to-right, short-circuiting on the first `Error`.
fn eval_expression_list(
    exprs: &[Expression],
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Result<Vec<Rc<Object>>, Rc<Object>> {
    let mut result = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let evaluated = eval_expression(expr, env, out);
        if evaluated.is_error() {
            return Err(evaluated);
        }
        result.push(evaluated);
    }
    Ok(result)
}

fn eval_call_expression(call: &CallExpression, env: &Rc<Environment>, out: &mut dyn Write) -> Rc<Object> {
    let function = eval_expression(&call.function, env, out);
    if function.is_error() {
        return function;
    }
    let arguments = match eval_expression_list(&call.arguments, env, out) {
        Ok(arguments) => arguments,
        Err(error) => return error,
    };
    apply_function(&function, &arguments, out)
}

fn apply_function(function: &Rc<Object>, arguments: &[Rc<Object>], out: &mut dyn Write) -> Rc<Object> {
    match function.as_ref() {
        Object::Function(f) => {
            if f.parameters.len() != arguments.len() {
                return Rc::new(Object::Error(format!(
                    "wrong number of arguments: expected={}, got={}",
                    f.parameters.len(),
                    arguments.len()
                )));
            }
            let call_env = Environment::new_enclosed(f.env.clone());
            for (param, argument) in f.parameters.iter().zip(arguments) {
                call_env.set(param.name.clone(), argument.clone());
            }
            unwrap_return_value(eval_block(&f.body, &call_env, out))
        }
        Object::Builtin(builtin) => (builtin.0)(arguments, out),
        other => Rc::new(Object::Error(format!("not a function: {}", other.type_tag()))),
    }
}

fn unwrap_return_value(object: Rc<Object>) -> Rc<Object> {
    match object.as_ref() {
        Object::ReturnValue(value) => value.clone(),
        _ => object,
    }
}

fn eval_index_expression(left: &Rc<Object>, index: &Rc<Object>) -> Rc<Object> {
    match (left.as_ref(), index.as_ref()) {
        (Object::Array(elements), Object::Integer(idx)) => eval_array_index(elements, *idx),
        (Object::Hash(hash), _) => eval_hash_index(hash, index),
        _ => Rc::new(Object::Error(format!(
            "index operator not supported: {}",
            left.type_tag()
        ))),
    }
}

fn eval_array_index(elements: &[Rc<Object>], idx: i64) -> Rc<Object> {
    if idx < 0 || idx as usize >= elements.len() {
        return null();
    }
    elements[idx as usize].clone()
}

fn eval_hash_index(hash: &ObjectHash, index: &Rc<Object>) -> Rc<Object> {
    let Some(key) = index.hash_key() else {
        return Rc::new(Object::Error(format!(
            "unusable as hash key: {}",
            index.type_tag()
        )));
    };
    match hash.pairs.get(&key) {
        Some((_, value)) => value.clone(),
        None => null(),
    }
}

fn eval_hash_literal(lit: &HashLiteral, env: &Rc<Environment>, out: &mut dyn Write) -> Rc<Object> {
    let mut pairs = IndexMap::new();
    for (key_expr, value_expr) in &lit.pairs {
        let key = eval_expression(key_expr, env, out);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return Rc::new(Object::Error(format!(
                "unusable as hash key: {}",
                key.type_tag()
            )));
        };
        let value = eval_expression(value_expr, env, out);
        if value.is_error() {
            return value;
        }
        pairs.insert(hash_key, (key, value));
    }
    Rc::new(Object::Hash(ObjectHash { pairs }))
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
        super::super::evaluate(&program, &env, &mut out)
    }

    #[test]
    fn closures_capture_by_environment() {
        let result = run("let a = fn(x){ fn(y){ x+y } }; let a2 = a(2); a2(3)");
        assert!(matches!(result.as_ref(), Object::Integer(5)));
    }

    #[test]
    fn recursive_function_computes_factorial() {
        let result = run("let f = fn(x){ if (x==1) {1} else {x * f(x-1)} }; f(5)");
        assert!(matches!(result.as_ref(), Object::Integer(120)));
    }

    #[test]
    fn array_indexing() {
        let result = run("let a = [1,2,3]; a[0] + a[1] + a[2]");
        assert!(matches!(result.as_ref(), Object::Integer(6)));
    }

    #[test]
    fn hash_indexing() {
        let result = run(r#"let h = {"one": 1, "two": 2}; h["one"] + h["two"]"#);
        assert!(matches!(result.as_ref(), Object::Integer(3)));
    }

    #[test]
    fn negative_array_index_is_null_not_wraparound() {
        let result = run("[1,2,3][-1]");
        assert!(matches!(result.as_ref(), Object::Null));
    }

    #[test]
    fn push_does_not_mutate_the_original_array() {
        let result = run("let a = [1,2]; let b = push(a, 3); a");
        let Object::Array(elements) = result.as_ref() else {
            panic!("expected array");
        };
        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn arity_mismatch_on_user_function_is_an_error() {
        let result = run("let f = fn(x, y) { x + y }; f(1)");
        let Object::Error(msg) = result.as_ref() else {
            panic!("expected error, got {result:?}");
        };
        assert_eq!(msg, "wrong number of arguments: expected=2, got=1");
    }

    #[test]
    fn non_hashable_key_is_an_error() {
        let result = run("{[1]: 1}");
        let Object::Error(msg) = result.as_ref() else {
            panic!("expected error, got {result:?}");
        };
        assert_eq!(msg, "unusable as hash key: ARRAY");
    }

    #[test]
    fn calling_a_non_function_is_an_error() {
        let result = run("5(1)");
        let Object::Error(msg) = result.as_ref() else {
            panic!("expected error, got {result:?}");
        };
        assert_eq!(msg, "not a function: INTEGER");
    }
}
