//! The fixed table of builtin functions.
//!
//! Each builtin has a curried function type seeded into Γ and a matching
//! curried callable seeded into ρ. Both come from this one enum, so the two
//! tables cannot drift apart. A 2-ary builtin is a unary callable returning
//! a partially applied builtin that closes over the first argument.

use std::rc::Rc;

use crate::errors::RuntimeError;
use crate::eval::value::{BuiltinFn, BuiltinFunc, PartialBuiltinFunc, Value};
use crate::types::Ty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    And,
    Or,
    Not,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Builtin {
    pub const ALL: [Builtin; 11] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::And,
        Builtin::Or,
        Builtin::Not,
        Builtin::Eq,
        Builtin::Ne,
        Builtin::Lt,
        Builtin::Le,
        Builtin::Gt,
        Builtin::Ge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "add",
            Builtin::Sub => "sub",
            Builtin::And => "and",
            Builtin::Or => "or",
            Builtin::Not => "not",
            Builtin::Eq => "eq",
            Builtin::Ne => "ne",
            Builtin::Lt => "lt",
            Builtin::Le => "le",
            Builtin::Gt => "gt",
            Builtin::Ge => "ge",
        }
    }

    fn arg_ty(self) -> Ty {
        match self {
            Builtin::And | Builtin::Or | Builtin::Not => Ty::Bool,
            _ => Ty::Int,
        }
    }

    fn result_ty(self) -> Ty {
        match self {
            Builtin::Add | Builtin::Sub => Ty::Int,
            _ => Ty::Bool,
        }
    }

    /// The full curried function type recorded in the type environment.
    pub fn ty(self) -> Ty {
        match self {
            Builtin::Not => Ty::func(Ty::Bool, Ty::Bool),
            _ => Ty::func(
                self.arg_ty(),
                Ty::func(self.arg_ty(), self.result_ty()),
            ),
        }
    }

    /// The callable value bound in the value environment. Its declared
    /// parameter and return types are the decomposition of [`Builtin::ty`].
    pub fn value(self) -> Value {
        let func: BuiltinFn = match self {
            Builtin::Add => int_op(self, |a, b| Value::Int(a.wrapping_add(b))),
            Builtin::Sub => int_op(self, |a, b| Value::Int(a.wrapping_sub(b))),
            Builtin::And => bool_op(self, |a, b| a && b),
            Builtin::Or => bool_op(self, |a, b| a || b),
            Builtin::Not => Rc::new(|arg| Ok(Value::Bool(!expect_bool(&arg)?))),
            Builtin::Eq => int_op(self, |a, b| Value::Bool(a == b)),
            Builtin::Ne => int_op(self, |a, b| Value::Bool(a != b)),
            Builtin::Lt => int_op(self, |a, b| Value::Bool(a < b)),
            Builtin::Le => int_op(self, |a, b| Value::Bool(a <= b)),
            Builtin::Gt => int_op(self, |a, b| Value::Bool(a > b)),
            Builtin::Ge => int_op(self, |a, b| Value::Bool(a >= b)),
        };

        let return_ty = match self {
            Builtin::Not => Ty::Bool,
            _ => Ty::func(self.arg_ty(), self.result_ty()),
        };

        Value::Builtin(Rc::new(BuiltinFunc {
            name: self.name(),
            param_ty: self.arg_ty(),
            return_ty,
            func,
        }))
    }
}

fn expect_int(v: &Value) -> Result<i64, RuntimeError> {
    v.as_int()
        .ok_or(RuntimeError::BuiltinMismatch { expected: Ty::Int })
}

fn expect_bool(v: &Value) -> Result<bool, RuntimeError> {
    v.as_bool()
        .ok_or(RuntimeError::BuiltinMismatch { expected: Ty::Bool })
}

/// A 2-ary builtin over integers: the first application captures the left
/// operand and yields a partial; the second performs the operation.
fn int_op(op: Builtin, f: fn(i64, i64) -> Value) -> BuiltinFn {
    Rc::new(move |arg| {
        let a = expect_int(&arg)?;
        Ok(Value::Partial(Rc::new(PartialBuiltinFunc {
            name: op.name(),
            param_ty: Ty::Int,
            return_ty: op.result_ty(),
            func: Rc::new(move |arg| {
                let b = expect_int(&arg)?;
                Ok(f(a, b))
            }),
        })))
    })
}

fn bool_op(op: Builtin, f: fn(bool, bool) -> bool) -> BuiltinFn {
    Rc::new(move |arg| {
        let a = expect_bool(&arg)?;
        Ok(Value::Partial(Rc::new(PartialBuiltinFunc {
            name: op.name(),
            param_ty: Ty::Bool,
            return_ty: Ty::Bool,
            func: Rc::new(move |arg| {
                let b = expect_bool(&arg)?;
                Ok(Value::Bool(f(a, b)))
            }),
        })))
    })
}
