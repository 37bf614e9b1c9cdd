//! Typed AST: the post-type-checking expression tree.
//!
//! Mirrors the untyped AST, with every node carrying the type the checker
//! assigned to it, so the evaluator never re-derives a type. Children are
//! held behind `Rc` because closures keep their body alive past the eval
//! call that created them.

use std::rc::Rc;

use crate::lexer::Span;
use crate::types::Ty;

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExpr {
    Var {
        name: String,
        span: Span,
        ty: Ty,
    },
    /// `ty` is always `Func { param_ty, body.ty() }`.
    Abs {
        param: String,
        param_ty: Ty,
        body: Rc<TypedExpr>,
        span: Span,
        ty: Ty,
    },
    /// `ty` is the codomain of `func`'s function type.
    App {
        func: Rc<TypedExpr>,
        arg: Rc<TypedExpr>,
        span: Span,
        ty: Ty,
    },
    Bool {
        value: bool,
        span: Span,
    },
    Int {
        value: i64,
        span: Span,
    },
    /// Both branches have the same type; `ty` is that shared type.
    If {
        cond: Rc<TypedExpr>,
        then_branch: Rc<TypedExpr>,
        else_branch: Rc<TypedExpr>,
        span: Span,
        ty: Ty,
    },
}

impl TypedExpr {
    /// The statically determined type of this node. Cached at construction;
    /// never recomputed from children.
    pub fn ty(&self) -> Ty {
        match self {
            TypedExpr::Bool { .. } => Ty::Bool,
            TypedExpr::Int { .. } => Ty::Int,
            TypedExpr::Var { ty, .. }
            | TypedExpr::Abs { ty, .. }
            | TypedExpr::App { ty, .. }
            | TypedExpr::If { ty, .. } => ty.clone(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TypedExpr::Var { span, .. }
            | TypedExpr::Abs { span, .. }
            | TypedExpr::App { span, .. }
            | TypedExpr::Bool { span, .. }
            | TypedExpr::Int { span, .. }
            | TypedExpr::If { span, .. } => *span,
        }
    }
}
