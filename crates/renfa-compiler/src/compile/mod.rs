//! NFA construction: a post-order walk over the expression tree.
//!
//! Each AST variant maps onto exactly one Thompson primitive. Operand
//! automata are built bottom-up and moved into the primitive that consumes
//! them, so no automaton is ever aliased or reused.

use renfa_core::{Nfa, thompson};

use crate::parser::ast::Expr;


/// Build the automaton for a parsed expression.
///
/// Infallible: structural errors are caught by the parser, character
/// errors by the validator.
pub fn build(expr: &Expr) -> Nfa {
    match expr {
        Expr::Literal(symbol) => thompson::literal(*symbol),
        Expr::Star(inner) => thompson::star(build(inner)),
        Expr::Concat(lhs, rhs) => thompson::concat(build(lhs), build(rhs)),
        Expr::Union(lhs, rhs) => thompson::union(build(lhs), build(rhs)),
    }
}
