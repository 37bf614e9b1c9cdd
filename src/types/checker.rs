//! Type checker for STLC.
//!
//! Syntax-directed, single pass, no inference: every binder's type is
//! explicit in the source, so checking is a recursive descent that threads
//! an immutable type environment (Γ). The output is a typed AST in which
//! every node carries its type.

use std::rc::Rc;

use crate::builtins::Builtin;
use crate::env::Env;
use crate::errors::TypeError;
use crate::parser::Expr;
use crate::types::typed::TypedExpr;
use crate::types::Ty;

/// The type environment Γ: a lexical scope chain from names to types.
pub type TypeEnv = Env<Ty>;

/// Type-check an expression against a Γ seeded with the builtin signatures.
pub fn check(expr: &Expr) -> Result<TypedExpr, TypeError> {
    let mut env = TypeEnv::new();
    for builtin in Builtin::ALL {
        env = env.bind(builtin.name(), builtin.ty());
    }
    check_expr(expr, &env)
}

fn check_expr(expr: &Expr, env: &TypeEnv) -> Result<TypedExpr, TypeError> {
    match expr {
        Expr::Var { name, span } => {
            let ty = env.lookup(name).ok_or_else(|| TypeError::UndefinedVariable {
                name: name.clone(),
                span: *span,
            })?;
            Ok(TypedExpr::Var {
                name: name.clone(),
                span: *span,
                ty: ty.clone(),
            })
        }

        Expr::Bool { value, span } => Ok(TypedExpr::Bool {
            value: *value,
            span: *span,
        }),

        Expr::Int { value, span } => Ok(TypedExpr::Int {
            value: *value,
            span: *span,
        }),

        Expr::Abs {
            param,
            param_ty,
            body,
            span,
        } => {
            // A single new frame; rebinding an outer name shadows it for
            // the body.
            let body = check_expr(body, &env.bind(param.clone(), param_ty.clone()))?;
            let ty = Ty::func(param_ty.clone(), body.ty());
            Ok(TypedExpr::Abs {
                param: param.clone(),
                param_ty: param_ty.clone(),
                body: Rc::new(body),
                span: *span,
                ty,
            })
        }

        Expr::App { func, arg, span } => {
            let func = check_expr(func, env)?;
            let Ty::Func { from, to } = func.ty() else {
                return Err(TypeError::NotAFunction {
                    ty: func.ty(),
                    span: *span,
                });
            };

            let arg = check_expr(arg, env)?;
            if arg.ty() != *from {
                return Err(TypeError::Mismatch {
                    expected: (*from).clone(),
                    actual: arg.ty(),
                    context: "application",
                    span: *span,
                });
            }

            Ok(TypedExpr::App {
                func: Rc::new(func),
                arg: Rc::new(arg),
                span: *span,
                ty: (*to).clone(),
            })
        }

        Expr::If {
            cond,
            then_branch,
            else_branch,
            span,
        } => {
            let cond = check_expr(cond, env)?;
            if cond.ty() != Ty::Bool {
                return Err(TypeError::InvalidCondition {
                    ty: cond.ty(),
                    span: *span,
                });
            }

            let then_branch = check_expr(then_branch, env)?;
            let else_branch = check_expr(else_branch, env)?;
            if then_branch.ty() != else_branch.ty() {
                return Err(TypeError::Mismatch {
                    expected: then_branch.ty(),
                    actual: else_branch.ty(),
                    context: "if-else branches",
                    span: *span,
                });
            }

            let ty = then_branch.ty();
            Ok(TypedExpr::If {
                cond: Rc::new(cond),
                then_branch: Rc::new(then_branch),
                else_branch: Rc::new(else_branch),
                span: *span,
                ty,
            })
        }
    }
}
