//! Automaton data model and Thompson construction primitives.
//!
//! This crate contains:
//! - `nfa` - the automaton representation (dense state indices, labeled transitions)
//! - `thompson` - the four combination primitives (`literal`, `star`, `concat`, `union`)
//!
//! Parsing lives in `renfa-compiler`; this crate performs no validation and
//! trusts its callers to hand it well-formed operands.

pub mod nfa;
pub mod thompson;


pub use nfa::{Nfa, StateId, Symbol, Transition};
