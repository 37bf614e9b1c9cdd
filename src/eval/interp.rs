//! Call-by-value evaluator over the typed AST.
//!
//! Environment-passing, not substitution-based: evaluation threads a value
//! environment (ρ) seeded with every builtin callable. A closure body runs
//! in a child frame of the closure's *captured* environment, never the
//! caller's — lexical, not dynamic, scoping.

use std::rc::Rc;

use crate::builtins::Builtin;
use crate::errors::RuntimeError;
use crate::eval::value::{Closure, Value, ValueEnv};
use crate::types::TypedExpr;

/// Evaluate a type-checked expression to a value.
pub fn eval(expr: &TypedExpr) -> Result<Value, RuntimeError> {
    let mut env = ValueEnv::new();
    for builtin in Builtin::ALL {
        env = env.bind(builtin.name(), builtin.value());
    }
    eval_expr(expr, &env)
}

fn eval_expr(expr: &TypedExpr, env: &ValueEnv) -> Result<Value, RuntimeError> {
    match expr {
        TypedExpr::Int { value, .. } => Ok(Value::Int(*value)),

        TypedExpr::Bool { value, .. } => Ok(Value::Bool(*value)),

        TypedExpr::Var { name, span, .. } => {
            // The checker already validated every reference; this only fires
            // for a malformed typed tree.
            env.lookup(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UndefinedVariable {
                    name: name.clone(),
                    span: *span,
                })
        }

        TypedExpr::Abs {
            param,
            param_ty,
            body,
            ..
        } => Ok(Value::Closure(Rc::new(Closure {
            param: param.clone(),
            param_ty: param_ty.clone(),
            body: Rc::clone(body),
            env: env.clone(),
        }))),

        TypedExpr::App {
            func, arg, span, ..
        } => {
            // Left-to-right order is part of the contract.
            let func = eval_expr(func, env)?;
            let arg = eval_expr(arg, env)?;

            match func {
                Value::Closure(closure) => {
                    let env = closure.env.bind(closure.param.clone(), arg);
                    eval_expr(&closure.body, &env)
                }
                Value::Builtin(builtin) => (builtin.func)(arg),
                Value::Partial(partial) => (partial.func)(arg),
                _ => Err(RuntimeError::ExpectedFunction { span: *span }),
            }
        }

        TypedExpr::If {
            cond,
            then_branch,
            else_branch,
            span,
            ..
        } => match eval_expr(cond, env)? {
            // Exactly one branch is evaluated.
            Value::Bool(true) => eval_expr(then_branch, env),
            Value::Bool(false) => eval_expr(else_branch, env),
            _ => Err(RuntimeError::ExpectedBoolean { span: *span }),
        },
    }
}
