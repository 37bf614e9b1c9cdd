//! Error handling module for the STLC interpreter.

pub mod diagnostic;
pub mod report;

pub use diagnostic::{Error, LexError, ParseError, Result, RuntimeError, TypeError};
pub use report::report_error;
