use crate::{
    errors::err::{Error, ErrorInfo, EvalResult},
    eval::number::Number,
    source_pos::join,
    syntax::{
        operators::{operator, Operation},
        tokens::{Span, Spanned, SpannedTok, Token},
    },
};

/// Evaluates a postfix stream in one pass over an operand stack. The span of
/// the returned value covers every token that contributed to it.
pub fn solve(tokens: &[SpannedTok]) -> EvalResult<Spanned<Number>> {
    let mut operands: Vec<Spanned<Number>> = vec![];

    for Spanned { elem, span } in tokens {
        let sym = match *elem {
            Token::Num(n) => {
                operands.push(Spanned::new(n, span.clone()));
                continue;
            }
            Token::Sym(sym) => sym,
        };
        let at = |error| ErrorInfo::new(error, span.clone());
        match operator(sym).map_err(at)?.operation {
            Operation::Binary(f) => {
                let (lhs, rhs) = match (operands.pop(), operands.pop()) {
                    (Some(rhs), Some(lhs)) => (lhs, rhs),
                    _ => return Err(at(Error::BinaryOperatorMissingOperands(sym))),
                };
                let value = f(lhs.elem, rhs.elem).map_err(at)?;
                let span = join(&join(&lhs.span, &rhs.span), span);
                operands.push(Spanned::new(value, span));
            }
            Operation::Unary(f) => {
                let operand = operands
                    .pop()
                    .ok_or_else(|| at(Error::UnaryOperatorMissingOperands(sym)))?;
                let value = f(operand.elem).map_err(at)?;
                operands.push(Spanned::new(value, join(&operand.span, span)));
            }
            // Parentheses never survive the conversion to postfix.
            Operation::Nop => return Err(at(Error::UnknownOperator(sym))),
        }
    }

    match operands.pop() {
        None => Err(ErrorInfo::new(Error::EmptyExpression, source_span(tokens))),
        Some(result) if operands.is_empty() => Ok(result),
        Some(result) => {
            // point at the first value nothing consumed
            let span = operands.get(1).map_or(result.span, |extra| extra.span.clone());
            Err(ErrorInfo::new(
                Error::DanglingOperands(operands.len() + 1),
                span,
            ))
        }
    }
}

fn source_span(tokens: &[SpannedTok]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => join(&first.span, &last.span),
        _ => 0..0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::Symbol;
    use pretty_assertions::assert_eq;

    fn num(n: i64, at: usize) -> SpannedTok {
        Spanned::new(Token::Num(Number::Int(n)), at..at + 1)
    }

    fn sym(s: Symbol, at: usize) -> SpannedTok {
        Spanned::new(Token::Sym(s), at..at + 1)
    }

    #[test]
    fn binary_operand_order() {
        // 7 2 -
        let tokens = [num(7, 0), num(2, 2), sym(Symbol::Minus, 1)];
        assert_eq!(solve(&tokens).unwrap(), Spanned::new(Number::Int(5), 0..3));
        // 8 2 /
        let tokens = [num(8, 0), num(2, 2), sym(Symbol::Slash, 1)];
        assert_eq!(solve(&tokens).unwrap().elem, Number::Float(4.0));
    }

    #[test]
    fn unary() {
        let tokens = [num(3, 1), sym(Symbol::Neg, 0), num(4, 3), sym(Symbol::Plus, 2)];
        assert_eq!(solve(&tokens).unwrap().elem, Number::Int(1));
    }

    #[test]
    fn missing_operands() {
        let tokens = [num(3, 1), sym(Symbol::Plus, 0)];
        assert_eq!(
            solve(&tokens),
            Err(ErrorInfo::new(
                Error::BinaryOperatorMissingOperands(Symbol::Plus),
                0..1
            ))
        );
        let tokens = [sym(Symbol::Neg, 0)];
        assert_eq!(
            solve(&tokens),
            Err(ErrorInfo::new(
                Error::UnaryOperatorMissingOperands(Symbol::Neg),
                0..1
            ))
        );
    }

    #[test]
    fn single_operand_for_binary() {
        // 4 ^
        let tokens = [num(4, 0), sym(Symbol::Caret, 1)];
        assert_eq!(
            solve(&tokens),
            Err(ErrorInfo::new(
                Error::BinaryOperatorMissingOperands(Symbol::Caret),
                1..2
            ))
        );
    }

    #[test]
    fn several_leftover_operands() {
        let tokens = [num(1, 0), num(2, 2), num(3, 4)];
        assert_eq!(
            solve(&tokens),
            Err(ErrorInfo::new(Error::DanglingOperands(3), 2..3))
        );
    }

    #[test]
    fn empty() {
        assert_eq!(
            solve(&[]),
            Err(ErrorInfo::new(Error::EmptyExpression, 0..0))
        );
    }

    #[test]
    fn leftover_operands() {
        let tokens = [num(3, 0), num(4, 2)];
        assert_eq!(
            solve(&tokens),
            Err(ErrorInfo::new(Error::DanglingOperands(2), 2..3))
        );
    }

    #[test]
    fn parenthesis_in_postfix_is_internal() {
        let tokens = [num(1, 1), sym(Symbol::LParen, 0)];
        let err = solve(&tokens).unwrap_err();
        assert_eq!(err.error, Error::UnknownOperator(Symbol::LParen));
        assert!(err.error.is_internal());
    }

    #[test]
    fn arithmetic_errors_point_at_the_operator() {
        let tokens = [num(1, 0), num(0, 2), sym(Symbol::Slash, 1)];
        assert_eq!(
            solve(&tokens),
            Err(ErrorInfo::new(Error::DivisionByZero, 1..2))
        );
    }
}
