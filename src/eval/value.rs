//! Runtime values for the STLC evaluator.

use std::fmt;
use std::rc::Rc;

use crate::env::Env;
use crate::errors::RuntimeError;
use crate::types::{Ty, TypedExpr};

/// The value environment ρ: a lexical scope chain from names to values.
pub type ValueEnv = Env<Value>;

/// The callable backing a builtin or a partially applied builtin.
pub type BuiltinFn = Rc<dyn Fn(Value) -> Result<Value, RuntimeError>>;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Closure(Rc<Closure>),
    Builtin(Rc<BuiltinFunc>),
    /// A 2-ary builtin applied to its first argument. Same calling contract
    /// as `Builtin`; distinguished only for display.
    Partial(Rc<PartialBuiltinFunc>),
}

/// A lambda paired with the environment captured at its definition site.
/// The captured chain is shared, not copied, and stays alive as long as the
/// closure does.
pub struct Closure {
    pub param: String,
    pub param_ty: Ty,
    pub body: Rc<TypedExpr>,
    pub env: ValueEnv,
}

pub struct BuiltinFunc {
    pub name: &'static str,
    pub param_ty: Ty,
    pub return_ty: Ty,
    pub func: BuiltinFn,
}

pub struct PartialBuiltinFunc {
    pub name: &'static str,
    pub param_ty: Ty,
    pub return_ty: Ty,
    pub func: BuiltinFn,
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            // Shows the static types of the parameter and of the body.
            Value::Closure(c) => {
                write!(f, "<λ{}:{}.{}>", c.param, c.param_ty, c.body.ty())
            }
            Value::Builtin(b) => {
                write!(f, "<builtin:{}:{}->{}>", b.name, b.param_ty, b.return_ty)
            }
            Value::Partial(p) => {
                write!(
                    f,
                    "<builtin:{}[partial]:{}->{}>",
                    p.name, p.param_ty, p.return_ty
                )
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
