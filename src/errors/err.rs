use std::fmt;

use crate::syntax::tokens::{Span, Symbol};

pub type EvalResult<T> = Result<T, ErrorInfo>;

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub error: Error,
    pub span: Span,
}

impl ErrorInfo {
    pub fn new(error: Error, span: Span) -> Self {
        Self { error, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The parenthesis has no partner, either a `)` with nothing open or a `(`
    /// still open at the end of the input.
    ParenthesesMismatch(Symbol),
    BinaryOperatorMissingOperands(Symbol),
    UnaryOperatorMissingOperands(Symbol),
    /// A symbol with no usable operator descriptor reached the evaluator.
    /// This is a bug in the pipeline, not in the input.
    UnknownOperator(Symbol),
    DivisionByZero,
    /// A power of finite operands does not fit in a float.
    Overflow,
    EmptyExpression,
    /// Number of values left over once the postfix stream is exhausted.
    DanglingOperands(usize),
}

impl Error {
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::UnknownOperator(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParenthesesMismatch(Symbol::RParen) => {
                f.write_str("mismatched parentheses: `)` closes nothing")
            }
            Error::ParenthesesMismatch(sym) => {
                write!(f, "mismatched parentheses: `{}` is never closed", sym)
            }
            Error::BinaryOperatorMissingOperands(sym) => {
                write!(f, "binary operator `{}` is missing operands", sym)
            }
            Error::UnaryOperatorMissingOperands(sym) => {
                write!(f, "unary operator `{}` is missing its operand", sym)
            }
            Error::UnknownOperator(sym) => {
                write!(f, "internal error: no operator registered for `{}`", sym)
            }
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Overflow => f.write_str("result is too large to represent"),
            Error::EmptyExpression => f.write_str("expression has nothing to evaluate"),
            Error::DanglingOperands(n) => {
                write!(f, "{} values left without an operator to combine them", n)
            }
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.error, self.span.start, self.span.end)
    }
}

impl std::error::Error for ErrorInfo {}
