//! Untyped AST for STLC expressions.

use crate::lexer::Span;
use crate::types::Ty;

/// An expression as produced by the parser, before type checking.
///
/// Every node carries the span of its leftmost token; an application reuses
/// the span of its already-built left operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var {
        name: String,
        span: Span,
    },
    Abs {
        param: String,
        param_ty: Ty,
        body: Box<Expr>,
        span: Span,
    },
    App {
        func: Box<Expr>,
        arg: Box<Expr>,
        span: Span,
    },
    Bool {
        value: bool,
        span: Span,
    },
    Int {
        value: i64,
        span: Span,
    },
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Var { span, .. }
            | Expr::Abs { span, .. }
            | Expr::App { span, .. }
            | Expr::Bool { span, .. }
            | Expr::Int { span, .. }
            | Expr::If { span, .. } => *span,
        }
    }
}
