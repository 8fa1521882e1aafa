use std::{convert::TryFrom, iter::Peekable, str::CharIndices};

use tracing::debug;

use crate::syntax::tokens::{Number, Spanned, SpannedTok, Symbol, Token};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Splits the source into numbers and symbols. Whitespace separates
    /// tokens but is never required; any other character is skipped.
    pub fn tokenize(mut self) -> Vec<SpannedTok> {
        let mut tokens = vec![];
        while let Some((pos, char)) = self.next() {
            match char {
                c if c.is_ascii_digit() => tokens.push(self.num(pos)),
                c if c.is_whitespace() => (),
                c => match Symbol::try_from(c) {
                    Ok(sym) => tokens.push(Spanned {
                        elem: Token::Sym(sym),
                        span: pos..pos + 1,
                    }),
                    Err(()) => debug!("skipping unrecognized character {:?} at {}", c, pos),
                },
            }
        }
        tokens
    }

    fn num(&mut self, start: usize) -> SpannedTok {
        let mut end = start + 1;
        while let Some((pos, _)) = self.next_if(|c| c.is_ascii_digit()) {
            end = pos + 1;
        }
        if let Some((pos, _)) = self.next_if(|c| c == '.') {
            end = pos + 1;
            while let Some((pos, _)) = self.next_if(|c| c.is_ascii_digit()) {
                end = pos + 1;
            }
        }
        let span = start..end;
        Spanned {
            elem: Token::Num(Number::from_literal(&self.source[span.clone()])),
            span,
        }
    }

    pub fn next_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<(usize, char)> {
        if predicate(self.peek()?.1) {
            return self.next();
        }
        None
    }

    fn peek(&mut self) -> Option<&(usize, char)> {
        self.chars.peek()
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}

/// Rewrites every `-` that cannot be a subtraction into `NEG`: a minus is
/// binary only right after a number or a `)`.
pub fn handle_neg(tokens: &mut [SpannedTok]) {
    for i in 0..tokens.len() {
        if tokens[i].elem != Token::Sym(Symbol::Minus) {
            continue;
        }
        let unary = match i.checked_sub(1).map(|prev| tokens[prev].elem) {
            None => true,
            Some(Token::Sym(sym)) => sym != Symbol::RParen,
            Some(Token::Num(_)) => false,
        };
        if unary {
            tokens[i].elem = Token::Sym(Symbol::Neg);
        }
    }
}
