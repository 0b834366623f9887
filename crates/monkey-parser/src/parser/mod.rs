mod composite;
mod core;
mod expression;
mod statement;

pub use core::{parse, Parser};
