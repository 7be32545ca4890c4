//! Expression tree for parsed patterns.
//!
//! The parser produces this directly; there is no intermediate CST. Each
//! variant maps one-to-one onto a construction primitive in renfa-core.

use std::fmt;

use renfa_core::Symbol;

/// A regular expression over the alphabet plus ε.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single alphabet character or the empty-string marker.
    Literal(Symbol),
    /// Kleene closure of the inner expression.
    Star(Box<Expr>),
    /// Sequential composition, left-associative.
    Concat(Box<Expr>, Box<Expr>),
    /// Alternation, left-associative.
    Union(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn star(inner: Expr) -> Self {
        Expr::Star(Box::new(inner))
    }

    pub fn concat(lhs: Expr, rhs: Expr) -> Self {
        Expr::Concat(Box::new(lhs), Box::new(rhs))
    }

    pub fn union(lhs: Expr, rhs: Expr) -> Self {
        Expr::Union(Box::new(lhs), Box::new(rhs))
    }
}

/// S-expression dump, used by tests and the debug surface:
/// `a(b|c)*` renders as `(concat a (star (union b c)))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(symbol) => write!(f, "{symbol}"),
            Expr::Star(inner) => write!(f, "(star {inner})"),
            Expr::Concat(lhs, rhs) => write!(f, "(concat {lhs} {rhs})"),
            Expr::Union(lhs, rhs) => write!(f, "(union {lhs} {rhs})"),
        }
    }
}
