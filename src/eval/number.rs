use std::{convert::TryFrom, fmt};

use crate::errors::err::Error;

/// A numeric value. Integer literals stay integers until an operation forces
/// them into floating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Reads a literal matched by the lexer: digits, optionally followed by a
    /// decimal point and more digits.
    pub fn from_literal(lit: &str) -> Number {
        if lit.contains('.') {
            return Number::Float(lit.parse().unwrap_or(f64::NAN));
        }
        // Too big for an i64, keep the magnitude at least.
        lit.parse()
            .map(Number::Int)
            .unwrap_or_else(|_| Number::Float(lit.parse().unwrap_or(f64::INFINITY)))
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing `.0` on whole floats
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

pub type ArithResult = Result<Number, Error>;

macro_rules! checked_or_float {
    ($name: ident, $checked: ident, $op: tt) => {
        pub fn $name(lhs: Number, rhs: Number) -> ArithResult {
            Ok(match (lhs, rhs) {
                (Number::Int(a), Number::Int(b)) => a
                    .$checked(b)
                    .map(Number::Int)
                    .unwrap_or_else(|| Number::Float(a as f64 $op b as f64)),
                (a, b) => Number::Float(a.as_f64() $op b.as_f64()),
            })
        }
    };
}

checked_or_float!(add, checked_add, +);
checked_or_float!(sub, checked_sub, -);
checked_or_float!(mul, checked_mul, *);

/// True division, the result is always a float.
pub fn div(lhs: Number, rhs: Number) -> ArithResult {
    if rhs.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(Number::Float(lhs.as_f64() / rhs.as_f64()))
}

pub fn pow(base: Number, exp: Number) -> ArithResult {
    if base.is_zero() && exp.as_f64() < 0.0 {
        return Err(Error::DivisionByZero);
    }
    if let (Number::Int(b), Number::Int(e)) = (base, exp) {
        if e >= 0 {
            // Exponents past u32 only stay integral for these bases.
            let trivial = match b {
                0 => Some(if e == 0 { 1 } else { 0 }),
                1 => Some(1),
                -1 => Some(if e % 2 == 0 { 1 } else { -1 }),
                _ => None,
            };
            let int = trivial.or_else(|| u32::try_from(e).ok().and_then(|e| b.checked_pow(e)));
            if let Some(n) = int {
                return Ok(Number::Int(n));
            }
        }
    }
    let value = base.as_f64().powf(exp.as_f64());
    if value.is_infinite() && base.as_f64().is_finite() && exp.as_f64().is_finite() {
        return Err(Error::Overflow);
    }
    Ok(Number::Float(value))
}

pub fn neg(operand: Number) -> ArithResult {
    Ok(match operand {
        Number::Int(i) => i
            .checked_neg()
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(-(i as f64))),
        Number::Float(f) => Number::Float(-f),
    })
}
