//! Lexically nested symbol table.
//!
//! `Environment` is always shared via `Rc`; the `RefCell` sits on the
//! inside (around the binding table only) so a closure can hold an `Rc`
//! to the environment it captured while new bindings keep flowing into it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

use crate::object::Object;

pub struct Environment {
    store: RefCell<FxHashMap<String, Rc<Object>>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            store: RefCell::new(FxHashMap::default()),
            outer: None,
        })
    }

    pub fn new_enclosed(outer: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            store: RefCell::new(FxHashMap::default()),
            outer: Some(outer),
        })
    }

    /// Looks up `name`, checking the innermost scope first and walking
    /// outward through enclosing environments.
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds `name` to `value` in this (innermost) scope only.
    pub fn set(&self, name: impl Into<String>, value: Rc<Object>) -> Rc<Object> {
        self.store.borrow_mut().insert(name.into(), value.clone());
        value
    }
}
