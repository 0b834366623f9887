//! The `Object` tagged union and its display/type-tag/truthiness
//! capabilities.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use monkey_ast::{BlockStatement, Expression, Identifier, Node};

use crate::environment::Environment;
use crate::hash_key::HashKey;

/// A runtime value produced by the evaluator.
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    /// Short-lived carrier used only to unwind out of nested blocks; never
    /// observed by user code.
    ReturnValue(Rc<Object>),
    /// Also unwinds like `ReturnValue`, but carries a diagnostic message
    /// instead of a value.
    Error(String),
    Function(Function),
    Builtin(Builtin),
    Array(Vec<Rc<Object>>),
    Hash(ObjectHash),
    /// An AST fragment lifted to a runtime value by `quote`.
    Quote(Expression),
    Macro(Macro),
}

pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<Environment>,
}

pub struct Macro {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<Environment>,
}

/// A native function bridging Monkey call sites to host (Rust) code.
/// Takes the evaluated argument slice plus the output sink `puts` writes
/// through, so builtins stay host-agnostic (tests wire an in-memory buffer,
/// the REPL wires real stdout) without smuggling a writer through `Object`.
pub type BuiltinFn = Rc<dyn Fn(&[Rc<Object>], &mut dyn std::io::Write) -> Rc<Object>>;

#[derive(Clone)]
pub struct Builtin(pub BuiltinFn);

/// Hash-literal storage: insertion order is preserved (`indexmap`) so
/// `inspect()` renders pairs in source order, and the original unhashed key
/// object is kept alongside the value for display.
pub struct ObjectHash {
    pub pairs: IndexMap<HashKey, (Rc<Object>, Rc<Object>)>,
}

impl Object {
    /// The type tag used in error messages (`INTEGER`, `ARRAY`, ...).
    pub fn type_tag(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Quote(_) => "QUOTE",
            Object::Macro(_) => "MACRO",
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(v) => v.to_string(),
            Object::Boolean(v) => v.to_string(),
            Object::String(v) => v.clone(),
            Object::Null => "null".to_string(),
            Object::ReturnValue(v) => v.inspect(),
            Object::Error(msg) => format!("ERROR: {msg}"),
            Object::Function(f) => {
                let params: Vec<String> = f
                    .parameters
                    .iter()
                    .map(Node::to_string)
                    .collect();
                format!("fn({}) {{\n{}\n}}", params.join(", "), f.body.to_string())
            }
            Object::Builtin(_) => "builtin function".to_string(),
            Object::Array(elems) => {
                let items: Vec<String> = elems.iter().map(|e| e.inspect()).collect();
                format!("[{}]", items.join(", "))
            }
            Object::Hash(h) => {
                let items: Vec<String> = h
                    .pairs
                    .values()
                    .map(|(k, v)| format!("{}: {}", k.inspect(), v.inspect()))
                    .collect();
                format!("{{{}}}", items.join(", "))
            }
            Object::Quote(node) => format!("QUOTE({})", node.to_string()),
            Object::Macro(m) => {
                let params: Vec<String> = m
                    .parameters
                    .iter()
                    .map(Node::to_string)
                    .collect();
                format!(
                    "macro({}) {{\n{}\n}}",
                    params.join(", "),
                    m.body.to_string()
                )
            }
        }
    }

    /// The truthiness projection used by `!` and `if`: `false`, `null`,
    /// integer `0`, and empty strings/arrays/hashes are false; everything
    /// else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Boolean(v) => *v,
            Object::Null => false,
            Object::Integer(v) => *v != 0,
            Object::String(s) => !s.is_empty(),
            Object::Array(elems) => !elems.is_empty(),
            Object::Hash(h) => !h.pairs.is_empty(),
            _ => true,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Projects this object onto a `HashKey`, or `None` if it is not one of
    /// the three hashable variants.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(v) => Some(HashKey::Integer(*v)),
            Object::Boolean(v) => Some(HashKey::Boolean(*v)),
            Object::String(v) => Some(HashKey::from_string(v)),
            _ => None,
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_tag(), self.inspect())
    }
}

thread_local! {
    static NULL: Rc<Object> = Rc::new(Object::Null);
    static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
}

/// The single shared `Null` instance. Canonicalizing it (along with
/// [`singleton_bool`]) isn't load-bearing in a single-threaded tree-walker —
/// equality here is always checked structurally, not by pointer — but it
/// avoids reallocating the same zero-sized value on every evaluation.
pub fn null() -> Rc<Object> {
    NULL.with(Clone::clone)
}

/// The single shared `Boolean(true)`/`Boolean(false)` instance.
pub fn singleton_bool(value: bool) -> Rc<Object> {
    if value {
        TRUE.with(Clone::clone)
    } else {
        FALSE.with(Clone::clone)
    }
}
