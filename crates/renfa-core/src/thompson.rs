//! Thompson's construction primitives.
//!
//! Each primitive consumes its operand automata by value and splices them
//! into a fresh index arena with additive offsets. Operands must be
//! non-empty (at least one state); the compiler guarantees this by only
//! feeding automata it built itself.
//!
//! Transition emission order is deterministic (entry edges first, then the
//! shifted operand bodies, then exit edges) so the rendered listing is
//! stable for a given pattern.

use crate::nfa::{Nfa, StateId, Symbol, Transition};

fn eps(from: StateId, to: StateId) -> Transition {
    Transition {
        from,
        symbol: Symbol::Epsilon,
        to,
    }
}

/// Two states, one transition: the base case of the construction.
pub fn literal(symbol: Symbol) -> Nfa {
    Nfa::literal(symbol)
}

/// Kleene closure (highest precedence operator).
///
/// Wraps `inner` in a fresh initial and final state with four ε-edges:
/// enter, exit, loop-back (repetition), and bypass (zero repetitions).
pub fn star(inner: Nfa) -> Nfa {
    let n = inner.state_count();
    let old_initial = 1;
    let old_final = inner.final_state + 1;
    let new_final = n + 1;

    let mut result = Nfa::with_states(n + 2);
    result.push(eps(0, old_initial));
    result.splice(inner, 1);
    result.push(eps(old_final, new_final));
    result.push(eps(old_final, old_initial));
    result.push(eps(0, new_final));
    result.final_state = new_final;
    result
}

/// Concatenation (middle precedence).
///
/// Identifies `second`'s initial state with `first`'s final state rather
/// than adding an ε-edge: `second`'s state 0 is dropped and every remaining
/// endpoint shifts by `|first| - 1`. One state smaller than the ε-edge
/// variant, same language.
pub fn concat(first: Nfa, second: Nfa) -> Nfa {
    let offset = first.state_count() - 1;
    let new_final = offset + second.final_state;

    let mut result = first;
    result.state_count = offset + second.state_count();
    result.splice(second, offset);
    result.final_state = new_final;
    result
}

/// Union (lowest precedence): the two-branch-then-rejoin topology.
///
/// A fresh initial state branches via ε into both operands; both operands'
/// final states rejoin via ε into a fresh final state. Internal states of
/// the operands are never merged.
pub fn union(left: Nfa, right: Nfa) -> Nfa {
    let n = left.state_count();
    let m = right.state_count();
    let new_final = n + m + 1;
    let left_final = left.final_state + 1;
    let right_final = right.final_state + n + 1;

    let mut result = Nfa::with_states(n + m + 2);
    result.push(eps(0, 1));
    result.splice(left, 1);
    result.push(eps(left_final, new_final));
    result.push(eps(0, n + 1));
    result.splice(right, n + 1);
    result.push(eps(right_final, new_final));
    result.final_state = new_final;
    result
}
