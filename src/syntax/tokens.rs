use std::{convert::TryFrom, fmt};

pub use crate::{
    eval::number::Number,
    source_pos::{Span, Spanned},
};

pub type SpannedTok = Spanned<Token>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Num(Number),

    Sym(Symbol),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(n) => fmt::Display::fmt(n, f),
            Token::Sym(sym) => f.write_str(sym.as_str()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    /// Unary minus. Never produced by the lexer directly, see `handle_neg`.
    Neg,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Caret => "^",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::Neg => "NEG",
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = ();
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '*' => Symbol::Star,
            '/' => Symbol::Slash,
            '^' => Symbol::Caret,
            '(' => Symbol::LParen,
            ')' => Symbol::RParen,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a token list as `[3, +, 4]`, for diagnostics.
pub struct TokenList<'a>(pub &'a [SpannedTok]);

impl fmt::Display for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, tok) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", tok.elem)?;
        }
        f.write_str("]")
    }
}
