//! Error types for the STLC pipeline.
//!
//! Every stage fails fast: the first error aborts the stage and propagates
//! to the caller. All diagnostics render as `"<line>:<col>: <message>"`; the
//! one exception is the positionless argument mismatch raised inside a
//! builtin.

use crate::lexer::Span;
use crate::types::Ty;
use thiserror::Error;

/// A lexical error with source location.
#[derive(Debug, Clone, Error)]
#[error("{}:{}: {message}", span.line, span.column)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A parser error with source location.
#[derive(Debug, Clone, Error)]
#[error("{}:{}: {message}", span.line, span.column)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A static-semantic error from the type checker.
///
/// The span is always that of the expression node being checked, not of the
/// offending sub-token.
#[derive(Debug, Clone, Error)]
pub enum TypeError {
    #[error("{}:{}: undefined variable: {name}", span.line, span.column)]
    UndefinedVariable { name: String, span: Span },

    #[error(
        "{}:{}: type mismatch in {context}: expected {expected}, got {actual}",
        span.line,
        span.column
    )]
    Mismatch {
        expected: Ty,
        actual: Ty,
        context: &'static str,
        span: Span,
    },

    #[error("{}:{}: cannot apply non-function type: {ty}", span.line, span.column)]
    NotAFunction { ty: Ty, span: Span },

    #[error("{}:{}: condition must be boolean, got {ty}", span.line, span.column)]
    InvalidCondition { ty: Ty, span: Span },
}

impl TypeError {
    pub fn span(&self) -> Span {
        match self {
            TypeError::UndefinedVariable { span, .. }
            | TypeError::Mismatch { span, .. }
            | TypeError::NotAFunction { span, .. }
            | TypeError::InvalidCondition { span, .. } => *span,
        }
    }
}

/// A runtime error from the evaluator.
///
/// Unreachable through the public pipeline for a program that passed type
/// checking; implemented defensively for malformed typed trees.
#[derive(Debug, Clone, Error)]
pub enum RuntimeError {
    #[error("{}:{}: undefined variable: {name}", span.line, span.column)]
    UndefinedVariable { name: String, span: Span },

    #[error("{}:{}: expected function value", span.line, span.column)]
    ExpectedFunction { span: Span },

    #[error("{}:{}: expected boolean value in if condition", span.line, span.column)]
    ExpectedBoolean { span: Span },

    /// Raised inside a builtin when the argument has the wrong runtime tag.
    /// Builtins run without access to the call site, so this carries no
    /// position.
    #[error("type mismatch: expected {expected}")]
    BuiltinMismatch { expected: Ty },
}

impl RuntimeError {
    pub fn span(&self) -> Option<Span> {
        match self {
            RuntimeError::UndefinedVariable { span, .. }
            | RuntimeError::ExpectedFunction { span }
            | RuntimeError::ExpectedBoolean { span } => Some(*span),
            RuntimeError::BuiltinMismatch { .. } => None,
        }
    }
}

/// Unified pipeline error type.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span),
            Error::Parse(e) => Some(e.span),
            Error::Type(e) => Some(e.span()),
            Error::Runtime(e) => e.span(),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
