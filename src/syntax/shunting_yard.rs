use crate::{
    errors::err::{Error, ErrorInfo, EvalResult},
    syntax::{
        operators::operator,
        tokens::{Span, Spanned, SpannedTok, Symbol, Token},
    },
};

/// Reorders an infix token stream (after `handle_neg`) into postfix order.
pub fn to_postfix(tokens: Vec<SpannedTok>) -> EvalResult<Vec<SpannedTok>> {
    let mut stack: Vec<Spanned<Symbol>> = vec![];
    let mut output = Vec::with_capacity(tokens.len());

    for Spanned { elem, span } in tokens {
        match elem {
            Token::Num(_) => output.push(Spanned { elem, span }),
            Token::Sym(Symbol::LParen) => stack.push(Spanned::new(Symbol::LParen, span)),
            Token::Sym(Symbol::RParen) => close_paren(&mut stack, &mut output, span)?,
            Token::Sym(sym) => {
                let current = operator(sym).map_err(|e| ErrorInfo::new(e, span.clone()))?;
                // A prefix operator has no left operand, nothing on the stack
                // can be waiting for it. Popping here would emit the `^` of
                // `2^-3` before its right operand exists.
                if !current.is_prefix() {
                    while let Some(top) = stack.last() {
                        if top.elem == Symbol::LParen {
                            break;
                        }
                        let top_op =
                            operator(top.elem).map_err(|e| ErrorInfo::new(e, top.span.clone()))?;
                        if !top_op.has_bigger_prec(current) {
                            break;
                        }
                        emit(&mut stack, &mut output);
                    }
                }
                stack.push(Spanned::new(sym, span));
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.elem == Symbol::LParen {
            return Err(ErrorInfo::new(
                Error::ParenthesesMismatch(Symbol::LParen),
                top.span,
            ));
        }
        output.push(top.map(Token::Sym));
    }
    Ok(output)
}

fn close_paren(
    stack: &mut Vec<Spanned<Symbol>>,
    output: &mut Vec<SpannedTok>,
    span: Span,
) -> EvalResult<()> {
    loop {
        match stack.last() {
            Some(top) if top.elem == Symbol::LParen => {
                stack.pop();
                return Ok(());
            }
            Some(_) => emit(stack, output),
            None => {
                return Err(ErrorInfo::new(
                    Error::ParenthesesMismatch(Symbol::RParen),
                    span,
                ))
            }
        }
    }
}

fn emit(stack: &mut Vec<Spanned<Symbol>>, output: &mut Vec<SpannedTok>) {
    if let Some(top) = stack.pop() {
        output.push(top.map(Token::Sym));
    }
}
