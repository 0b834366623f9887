//! Prefix/infix dispatch: arithmetic, comparison, string concatenation, and
//! the reference-equality fallback that canonicalized booleans make correct
//! for everything else.

use std::rc::Rc;

use monkey_object::{singleton_bool, Object};

pub(crate) fn eval_prefix_expression(operator: &str, right: &Rc<Object>) -> Rc<Object> {
    match operator {
        "!" => singleton_bool(!right.is_truthy()),
        "-" => eval_minus_prefix(right),
        _ => Rc::new(Object::Error(format!(
            "unknown operator: {operator}{}",
            right.type_tag()
        ))),
    }
}

fn eval_minus_prefix(right: &Rc<Object>) -> Rc<Object> {
    match right.as_ref() {
        Object::Integer(v) => Rc::new(Object::Integer(-v)),
        other => Rc::new(Object::Error(format!(
            "unknown operator: -{}",
            other.type_tag()
        ))),
    }
}

pub(crate) fn eval_infix_expression(
    operator: &str,
    left: &Rc<Object>,
    right: &Rc<Object>,
) -> Rc<Object> {
    match (left.as_ref(), right.as_ref()) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, l, r),
        // Neither side is Integer/Integer or String/String beyond this point.
        // `==`/`!=` fall back to reference equality, which is correct for
        // the canonicalized `TRUE`/`FALSE`/`NULL` singletons and otherwise
        // simply reports "different objects" for mismatched types.
        _ if operator == "==" => singleton_bool(Rc::ptr_eq(left, right)),
        _ if operator == "!=" => singleton_bool(!Rc::ptr_eq(left, right)),
        _ if left.type_tag() != right.type_tag() => Rc::new(Object::Error(format!(
            "type mismatch: {} {operator} {}",
            left.type_tag(),
            right.type_tag()
        ))),
        _ => Rc::new(Object::Error(format!(
            "unknown operator: {} {operator} {}",
            left.type_tag(),
            right.type_tag()
        ))),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Rc<Object> {
    match operator {
        // Wrapping, matching the reference implementation's machine-word
        // arithmetic: valid Monkey input must never panic the host.
        "+" => Rc::new(Object::Integer(left.wrapping_add(right))),
        "-" => Rc::new(Object::Integer(left.wrapping_sub(right))),
        "*" => Rc::new(Object::Integer(left.wrapping_mul(right))),
        "/" if right == 0 => Rc::new(Object::Error("division by zero".to_string())),
        "/" => Rc::new(Object::Integer(left / right)),
        "==" => singleton_bool(left == right),
        "!=" => singleton_bool(left != right),
        "<" => singleton_bool(left < right),
        ">" => singleton_bool(left > right),
        _ => Rc::new(Object::Error(format!(
            "unknown operator: INTEGER {operator} INTEGER"
        ))),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::String(format!("{left}{right}"))),
        "==" => singleton_bool(left == right),
        "!=" => singleton_bool(left != right),
        _ => Rc::new(Object::Error(format!(
            "unknown operator: STRING {operator} STRING"
        ))),
    }
}
