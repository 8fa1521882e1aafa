//! Arithmetic expression evaluation in three passes: the source is lexed into
//! tokens, reordered into postfix with the shunting yard algorithm, and the
//! postfix stream is folded over an operand stack.
//!
//! ```
//! use rpn_calc::{evaluate, Number};
//!
//! assert_eq!(evaluate("3+4*2", false).unwrap(), Number::Int(11));
//! assert_eq!(evaluate("2^3^2", false).unwrap(), Number::Int(512));
//! assert_eq!(evaluate("5/2", false).unwrap(), Number::Float(2.5));
//! ```
pub mod errors;
pub mod eval;
pub mod source_pos;
pub mod syntax;

use tracing::info;

pub use errors::{Error, ErrorInfo, EvalResult};
pub use eval::Number;
use syntax::{handle_neg, to_postfix, Lexer, SpannedTok, TokenList};

/// Every intermediate stage of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub tokens: Vec<SpannedTok>,
    /// `tokens` after unary minus signs were rewritten to `NEG`.
    pub negated: Vec<SpannedTok>,
    pub postfix: Vec<SpannedTok>,
    pub result: Number,
}

impl Evaluation {
    pub fn run(expression: &str) -> EvalResult<Self> {
        Self::run_inner(expression, false)
    }

    fn run_inner(expression: &str, verbose: bool) -> EvalResult<Self> {
        if verbose {
            info!("{:>15} {}", "Expression:", expression);
        }
        let tokens = Lexer::new(expression).tokenize();
        if verbose {
            info!("{:>15} {}", "Initial Tokens:", TokenList(&tokens));
        }
        let mut negated = tokens.clone();
        handle_neg(&mut negated);
        if verbose {
            info!("{:>15} {}", "Final Tokens:", TokenList(&negated));
        }
        let postfix = to_postfix(negated.clone())?;
        if verbose {
            info!("{:>15} {}", "Postfix:", TokenList(&postfix));
        }
        let result = eval::solve(&postfix).map_err(|mut e| {
            if e.error == Error::EmptyExpression {
                e.span = 0..expression.len();
            }
            e
        })?;
        if verbose {
            info!("{:>15} {}", "Result:", result.elem);
        }
        Ok(Self {
            tokens,
            negated,
            postfix,
            result: result.elem,
        })
    }
}

/// Evaluates `expression`. With `verbose` set, each stage is reported through
/// `tracing` at info level; the returned value is the same either way.
pub fn evaluate(expression: &str, verbose: bool) -> EvalResult<Number> {
    Evaluation::run_inner(expression, verbose).map(|e| e.result)
}
