//! Type system for the STLC interpreter.
//!
//! This module provides:
//! - Type representation and structural equality (`types`)
//! - The typed AST produced by checking (`typed`)
//! - The syntax-directed type checker (`checker`)

pub mod checker;
pub mod typed;
pub mod types;

pub use checker::{check, TypeEnv};
pub use typed::TypedExpr;
pub use types::Ty;
