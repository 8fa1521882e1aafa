use std::ops::Range;

pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub elem: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(elem: T, span: Span) -> Self {
        Self { elem, span }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            elem: f(self.elem),
            span: self.span,
        }
    }
}

/// Smallest span covering both `a` and `b`.
pub fn join(a: &Span, b: &Span) -> Span {
    a.start.min(b.start)..a.end.max(b.end)
}
