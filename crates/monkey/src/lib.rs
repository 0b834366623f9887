//! Facade crate: the whole Monkey pipeline — lex, parse, define/expand
//! macros, evaluate — behind one dependency for hosts like `monkey-repl`.

use std::io::Write;
use std::rc::Rc;

pub use monkey_ast::{Node, Program};
pub use monkey_eval::MacroError;
pub use monkey_lexer::Lexer;
pub use monkey_object::{Environment, Object};
pub use monkey_parser::ParseError;
pub use monkey_token::Token;

/// Tokenizes `source` without parsing it.
pub fn lex(source: &str) -> Lexer {
    Lexer::new(source)
}

/// Parses `source` into a [`Program`], accumulating structured errors
/// instead of failing on the first one.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    monkey_parser::parse(source)
}

/// Strips `let NAME = macro(...) {...}` definitions out of `program`,
/// binding each into `env` as a side effect. Call this before
/// [`expand_macros`], against an environment dedicated to macro
/// definitions (kept separate from the one `evaluate` runs against, so a
/// macro and a value can share a name without colliding).
pub fn define_macros(program: Program, env: &Rc<Environment>) -> Program {
    monkey_eval::define_macros(program, env)
}

/// Rewrites every macro call site in `program` with the AST fragment its
/// body quoted, using macros previously bound by [`define_macros`].
pub fn expand_macros(
    program: Program,
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Result<Program, MacroError> {
    monkey_eval::expand_macros(program, env, out)
}

/// Evaluates a macro-expanded `program` against `env`, writing any `puts`
/// output to `out`.
pub fn evaluate(program: &Program, env: &Rc<Environment>, out: &mut dyn Write) -> Rc<Object> {
    monkey_eval::evaluate(program, env, out)
}
