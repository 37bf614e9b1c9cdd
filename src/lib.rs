//! Interpreter for the simply typed lambda calculus, extended with booleans,
//! integers, conditionals and a small set of builtin functions.
//!
//! The pipeline has four stages, each consuming the previous stage's output
//! and failing fast with a positioned error:
//!
//! - [`lexer`]: tokenizes source text, one token at a time
//! - [`parser`]: recursive descent over the token stream, building the
//!   untyped AST
//! - [`types`]: syntax-directed type checking, producing a typed AST in
//!   which every node carries its type
//! - [`eval`]: call-by-value, environment-passing evaluation with closures
//!   and curried builtins
//!
//! # Example
//!
//! ```
//! use stlc::{parse, check, eval};
//!
//! let expr = parse(r"(\x:Int.x) 42").unwrap();
//! let typed = check(&expr).unwrap();
//! let value = eval(&typed).unwrap();
//! assert_eq!(value.as_int(), Some(42));
//! ```

pub mod builtins;
pub mod env;
pub mod errors;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod types;

pub use builtins::Builtin;
pub use env::Env;
pub use errors::{Error, LexError, ParseError, Result, RuntimeError, TypeError};
pub use eval::{eval, Value};
pub use lexer::{Scanner, Span, Token, TokenKind};
pub use parser::{parse, Expr, Parser};
pub use types::{check, Ty, TypedExpr};

/// Run the full pipeline on a source string.
pub fn run(source: &str) -> Result<Value> {
    let expr = parse(source)?;
    let typed = check(&expr)?;
    let value = eval(&typed)?;
    Ok(value)
}
