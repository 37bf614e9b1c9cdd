//! Type representation for STLC.

use std::fmt;
use std::rc::Rc;

/// A simple type: `Bool`, `Int`, or a function type.
///
/// Types are immutable and freely shared; the function constructor holds its
/// components behind `Rc` so cloning a type never copies structure.
/// Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Bool,
    Int,
    Func { from: Rc<Ty>, to: Rc<Ty> },
}

impl Ty {
    pub fn func(from: Ty, to: Ty) -> Ty {
        Ty::Func {
            from: Rc::new(from),
            to: Rc::new(to),
        }
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Ty::Func { .. })
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Bool => write!(f, "Bool"),
            Ty::Int => write!(f, "Int"),
            // Function types always print parenthesized: (Int -> (Int -> Bool))
            Ty::Func { from, to } => write!(f, "({} -> {})", from, to),
        }
    }
}
