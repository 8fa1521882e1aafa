use phf::phf_map;

use crate::{
    errors::err::Error,
    eval::number::{self, ArithResult, Number},
    syntax::tokens::Symbol,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Assoc {
    None,
    Left,
    Right,
}
impl Assoc {
    pub fn is_left(&self) -> bool {
        self == &Assoc::Left
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arity {
    None,
    Unary,
    Binary,
}

#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// Grouping only, parentheses never compute anything.
    Nop,
    Unary(fn(Number) -> ArithResult),
    Binary(fn(Number, Number) -> ArithResult),
}

#[derive(Clone, Copy, Debug)]
pub struct Operator {
    pub sym: &'static str,
    pub assoc: Assoc,
    pub prec: u8,
    pub operation: Operation,
}
impl Operator {
    /// Whether `self`, sitting on the operator stack, has to be emitted before
    /// `op` gets pushed.
    pub fn has_bigger_prec(&self, op: &Operator) -> bool {
        self.prec > op.prec || (self.prec == op.prec && op.is_left_assoc())
    }

    pub fn is_left_assoc(&self) -> bool {
        self.assoc.is_left()
    }

    pub fn is_prefix(&self) -> bool {
        self.arity() == Arity::Unary
    }

    pub fn arity(&self) -> Arity {
        match self.operation {
            Operation::Nop => Arity::None,
            Operation::Unary(_) => Arity::Unary,
            Operation::Binary(_) => Arity::Binary,
        }
    }
}

pub static OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator {
        prec: 1,
        assoc: Assoc::Left,
        sym: "+",
        operation: Operation::Binary(number::add),
    },
    "-" => Operator {
        prec: 1,
        assoc: Assoc::Left,
        sym: "-",
        operation: Operation::Binary(number::sub),
    },
    "*" => Operator {
        prec: 2,
        assoc: Assoc::Left,
        sym: "*",
        operation: Operation::Binary(number::mul),
    },
    "/" => Operator {
        prec: 2,
        assoc: Assoc::Left,
        sym: "/",
        operation: Operation::Binary(number::div),
    },
    "^" => Operator {
        prec: 3,
        assoc: Assoc::Right,
        sym: "^",
        operation: Operation::Binary(number::pow),
    },
    "(" => Operator {
        prec: 0,
        assoc: Assoc::None,
        sym: "(",
        operation: Operation::Nop,
    },
    ")" => Operator {
        prec: 0,
        assoc: Assoc::None,
        sym: ")",
        operation: Operation::Nop,
    },
    "NEG" => Operator {
        prec: 2,
        assoc: Assoc::Right,
        sym: "NEG",
        operation: Operation::Unary(number::neg),
    },
};

/// Looks up the descriptor for `sym`. A miss means the table and `Symbol` are
/// out of sync.
pub fn operator(sym: Symbol) -> Result<&'static Operator, Error> {
    OPERATOR_TABLE
        .get(sym.as_str())
        .ok_or(Error::UnknownOperator(sym))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: [Symbol; 8] = [
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Star,
        Symbol::Slash,
        Symbol::Caret,
        Symbol::LParen,
        Symbol::RParen,
        Symbol::Neg,
    ];

    #[test]
    fn every_symbol_is_registered() {
        for sym in ALL.iter() {
            let op = operator(*sym).unwrap();
            assert_eq!(op.sym, sym.as_str());
        }
        assert_eq!(OPERATOR_TABLE.len(), ALL.len());
    }

    #[test]
    fn metadata() {
        let prec = |s| operator(s).unwrap().prec;
        assert_eq!(prec(Symbol::LParen), 0);
        assert_eq!(prec(Symbol::Plus), prec(Symbol::Minus));
        assert_eq!(prec(Symbol::Star), prec(Symbol::Slash));
        assert_eq!(prec(Symbol::Neg), prec(Symbol::Star));
        assert!(prec(Symbol::Caret) > prec(Symbol::Star));

        let arity = |s| operator(s).unwrap().arity();
        assert_eq!(arity(Symbol::RParen), Arity::None);
        assert_eq!(arity(Symbol::Neg), Arity::Unary);
        assert_eq!(arity(Symbol::Caret), Arity::Binary);

        assert_eq!(operator(Symbol::Caret).unwrap().assoc, Assoc::Right);
        assert_eq!(operator(Symbol::Neg).unwrap().assoc, Assoc::Right);
        assert_eq!(operator(Symbol::Minus).unwrap().assoc, Assoc::Left);
    }

    #[test]
    fn precedence_comparison() {
        let op = |s| operator(s).unwrap();
        // left assoc: equal precedence pops
        assert!(op(Symbol::Minus).has_bigger_prec(op(Symbol::Plus)));
        // right assoc: equal precedence stays
        assert!(!op(Symbol::Caret).has_bigger_prec(op(Symbol::Caret)));
        assert!(op(Symbol::Star).has_bigger_prec(op(Symbol::Plus)));
        assert!(!op(Symbol::Plus).has_bigger_prec(op(Symbol::Star)));
    }

    #[test]
    fn operations_dispatch() {
        match operator(Symbol::Slash).unwrap().operation {
            Operation::Binary(f) => assert_eq!(f(Number::Int(5), Number::Int(2)), Ok(Number::Float(2.5))),
            other => panic!("unexpected operation {:?}", other),
        }
        match operator(Symbol::Neg).unwrap().operation {
            Operation::Unary(f) => assert_eq!(f(Number::Int(3)), Ok(Number::Int(-3))),
            other => panic!("unexpected operation {:?}", other),
        }
    }
}
