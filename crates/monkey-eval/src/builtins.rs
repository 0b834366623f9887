//! The fixed set of native functions every environment sees without a
//! binding: `len`, `first`, `last`, `rest`, `push`, and `puts`.

use std::io::Write;
use std::rc::Rc;

use monkey_object::{null, Builtin, Object};

/// Resolves a builtin by name, or `None` if `name` isn't one.
pub(crate) fn lookup(name: &str) -> Option<Rc<Object>> {
    let builtin = match name {
        "len" => builtin_len,
        "first" => builtin_first,
        "last" => builtin_last,
        "rest" => builtin_rest,
        "push" => builtin_push,
        "puts" => builtin_puts,
        _ => return None,
    };
    Some(Rc::new(Object::Builtin(Builtin(Rc::new(builtin)))))
}

fn arity_error(expected: usize, got: usize) -> Rc<Object> {
    Rc::new(Object::Error(format!(
        "wrong number of arguments. expected={expected}, got={got}"
    )))
}

fn builtin_len(args: &[Rc<Object>], _out: &mut dyn Write) -> Rc<Object> {
    if args.len() != 1 {
        return arity_error(1, args.len());
    }
    match args[0].as_ref() {
        Object::String(s) => Rc::new(Object::Integer(s.len() as i64)),
        Object::Array(elements) => Rc::new(Object::Integer(elements.len() as i64)),
        other => Rc::new(Object::Error(format!(
            "argument to `len` not supported, got={}",
            other.type_tag()
        ))),
    }
}

fn as_array<'a>(args: &'a [Rc<Object>], name: &str) -> Result<&'a [Rc<Object>], Rc<Object>> {
    if args.len() != 1 {
        return Err(arity_error(1, args.len()));
    }
    match args[0].as_ref() {
        Object::Array(elements) => Ok(elements),
        other => Err(Rc::new(Object::Error(format!(
            "argument to `{name}` must be ARRAY, got={}",
            other.type_tag()
        )))),
    }
}

fn builtin_first(args: &[Rc<Object>], _out: &mut dyn Write) -> Rc<Object> {
    let elements = match as_array(args, "first") {
        Ok(elements) => elements,
        Err(error) => return error,
    };
    elements.first().cloned().unwrap_or_else(null)
}

fn builtin_last(args: &[Rc<Object>], _out: &mut dyn Write) -> Rc<Object> {
    let elements = match as_array(args, "last") {
        Ok(elements) => elements,
        Err(error) => return error,
    };
    elements.last().cloned().unwrap_or_else(null)
}

fn builtin_rest(args: &[Rc<Object>], _out: &mut dyn Write) -> Rc<Object> {
    let elements = match as_array(args, "rest") {
        Ok(elements) => elements,
        Err(error) => return error,
    };
    if elements.is_empty() {
        return null();
    }
    Rc::new(Object::Array(elements[1..].to_vec()))
}

fn builtin_push(args: &[Rc<Object>], _out: &mut dyn Write) -> Rc<Object> {
    if args.len() != 2 {
        return arity_error(2, args.len());
    }
    let Object::Array(elements) = args[0].as_ref() else {
        return Rc::new(Object::Error(format!(
            "argument to `push` must be ARRAY, got={}",
            args[0].type_tag()
        )));
    };
    let mut copy = elements.clone();
    copy.push(args[1].clone());
    Rc::new(Object::Array(copy))
}

fn builtin_puts(args: &[Rc<Object>], out: &mut dyn Write) -> Rc<Object> {
    for arg in args {
        let _ = writeln!(out, "{}", arg.inspect());
    }
    null()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[Rc<Object>]) -> Rc<Object> {
        let builtin = lookup(name).expect("builtin exists");
        let Object::Builtin(Builtin(f)) = builtin.as_ref() else {
            panic!("not a builtin");
        };
        let mut out = Vec::new();
        f(args, &mut out)
    }

    #[test]
    fn len_of_string_counts_bytes() {
        let result = call("len", &[Rc::new(Object::String("hello".into()))]);
        assert!(matches!(result.as_ref(), Object::Integer(5)));
    }

    #[test]
    fn len_rejects_unsupported_types() {
        let result = call("len", &[Rc::new(Object::Integer(1))]);
        let Object::Error(msg) = result.as_ref() else {
            panic!("expected error");
        };
        assert_eq!(msg, "argument to `len` not supported, got=INTEGER");
    }

    #[test]
    fn rest_of_empty_array_is_null() {
        let result = call("rest", &[Rc::new(Object::Array(vec![]))]);
        assert!(matches!(result.as_ref(), Object::Null));
    }

    #[test]
    fn push_appends_without_mutating_input() {
        let arr = Rc::new(Object::Array(vec![Rc::new(Object::Integer(1))]));
        let result = call("push", &[arr.clone(), Rc::new(Object::Integer(2))]);
        let Object::Array(elements) = result.as_ref() else {
            panic!("expected array");
        };
        assert_eq!(elements.len(), 2);
        let Object::Array(original) = arr.as_ref() else {
            panic!("expected array");
        };
        assert_eq!(original.len(), 1);
    }

    #[test]
    fn puts_writes_inspect_of_each_argument_to_the_sink() {
        let builtin = lookup("puts").expect("builtin exists");
        let Object::Builtin(Builtin(f)) = builtin.as_ref() else {
            panic!("not a builtin");
        };
        let mut out = Vec::new();
        f(&[Rc::new(Object::Integer(5)), Rc::new(Object::String("hi".into()))], &mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "5\nhi\n");
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert!(lookup("nope").is_none());
    }
}
