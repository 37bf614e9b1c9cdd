//! Evaluation module for the STLC interpreter.
//!
//! Runtime values and the environment-passing call-by-value evaluator.

pub mod interp;
pub mod value;

pub use interp::eval;
pub use value::{BuiltinFn, BuiltinFunc, Closure, PartialBuiltinFunc, Value, ValueEnv};
