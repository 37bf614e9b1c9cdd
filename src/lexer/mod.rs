//! Lexer module for the STLC interpreter.
//!
//! This module is responsible for tokenizing STLC source text into
//! a stream of tokens that can be consumed by the parser.

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
