//! Hashable projection of the three Object variants usable as hash-literal
//! keys. Keeping this a separate small type (rather than hashing `Object`
//! itself) is what guarantees an Integer and a String with "the same
//! number" never collide: the variant tag is part of the key.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(u64),
}

impl HashKey {
    pub fn from_string(value: &str) -> Self {
        let mut hasher = FxHasher::default();
        value.hash(&mut hasher);
        HashKey::String(hasher.finish())
    }
}
