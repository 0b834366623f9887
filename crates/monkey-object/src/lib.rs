//! Runtime value model for the Monkey language.
//!
//! `Object` is a tagged union of every runtime value Monkey programs can
//! produce. Values are shared via `Rc` rather than cloned, since arrays,
//! hashes, and closures all need cheap structural sharing and the
//! single-threaded Non-goal rules out `Arc`.

mod environment;
mod hash_key;
mod object;

pub use environment::Environment;
pub use hash_key::HashKey;
pub use object::{null, singleton_bool, Builtin, BuiltinFn, Function, Macro, Object, ObjectHash};
