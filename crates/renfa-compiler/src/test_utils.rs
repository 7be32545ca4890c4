//! Test helpers: an ε-closure simulator for checking accepted languages.
//!
//! Matching is out of scope for the compiler itself; this little simulator
//! exists so the tests can assert on languages instead of on graph shapes.

use std::collections::HashSet;

use renfa_core::{Nfa, StateId, Symbol};

/// Whether `nfa` accepts `input` under ε-closure simulation.
pub fn accepts(nfa: &Nfa, input: &str) -> bool {
    let Some(final_state) = nfa.final_state() else {
        return false;
    };

    let mut current = epsilon_closure(nfa, HashSet::from([0]));
    for ch in input.chars() {
        let mut next = HashSet::new();
        for t in nfa.transitions() {
            if t.symbol == Symbol::Char(ch) && current.contains(&t.from) {
                next.insert(t.to);
            }
        }
        if next.is_empty() {
            return false;
        }
        current = epsilon_closure(nfa, next);
    }

    current.contains(&final_state)
}

fn epsilon_closure(nfa: &Nfa, states: HashSet<StateId>) -> HashSet<StateId> {
    let mut closure = states;
    let mut stack: Vec<StateId> = closure.iter().copied().collect();

    while let Some(state) = stack.pop() {
        for t in nfa.transitions() {
            if t.from == state && t.symbol.is_epsilon() && closure.insert(t.to) {
                stack.push(t.to);
            }
        }
    }

    closure
}

/// The languages of two automata agree on every sample.
pub fn assert_same_language(a: &Nfa, b: &Nfa, samples: &[&str]) {
    for sample in samples {
        assert_eq!(
            accepts(a, sample),
            accepts(b, sample),
            "automata disagree on {sample:?}"
        );
    }
}
