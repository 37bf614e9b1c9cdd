//! Parser module for the STLC interpreter.
//!
//! This module is responsible for parsing tokens into an abstract syntax
//! tree, using a hand-written recursive descent parser with one token of
//! lookahead.

pub mod ast;
pub mod parser;

pub use ast::Expr;
pub use parser::{parse, Parser};
