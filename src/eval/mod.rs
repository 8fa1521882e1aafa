pub mod number;

pub mod postfix;

pub use number::Number;
pub use postfix::solve;
