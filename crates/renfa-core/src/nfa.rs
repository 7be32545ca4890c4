//! Automaton representation: dense state indices and labeled transitions.
//!
//! States carry no payload; identity is purely positional (`0..state_count`).
//! Combination primitives splice automata together by shifting indices, so
//! state numbers are only stable within the automaton that owns them.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A state index, unique within one automaton. State 0 is always initial.
pub type StateId = usize;

/// Transition label: an alphabet character or the empty-string marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    Epsilon,
}

impl Symbol {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Epsilon => f.write_str("E"),
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An ordered `(from, symbol, to)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

/// A non-deterministic finite automaton over `0..state_count` dense states.
///
/// Exactly one state is final once any state exists. Every constructor in
/// this crate leaves the final state at the highest index; `thompson::concat`
/// relies on that when it identifies the second operand's initial state with
/// the first operand's final state using size arithmetic alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nfa {
    pub(crate) state_count: usize,
    pub(crate) transitions: Vec<Transition>,
    pub(crate) final_state: StateId,
}

impl Nfa {
    /// Zero-state automaton: the "nothing was built" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Automaton with states `0..n` and no transitions yet.
    pub fn with_states(n: usize) -> Self {
        Self {
            state_count: n,
            transitions: Vec::new(),
            final_state: 0,
        }
    }

    /// Two-state automaton recognizing exactly `symbol`: `(0, symbol, 1)`.
    pub fn literal(symbol: Symbol) -> Self {
        let mut nfa = Self::with_states(2);
        nfa.push(Transition {
            from: 0,
            symbol,
            to: 1,
        });
        nfa.final_state = 1;
        nfa
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The single accepting state, or `None` for the zero-state sentinel.
    pub fn final_state(&self) -> Option<StateId> {
        (self.state_count > 0).then_some(self.final_state)
    }

    pub fn is_empty(&self) -> bool {
        self.state_count == 0
    }

    pub(crate) fn push(&mut self, transition: Transition) {
        debug_assert!(transition.from < self.state_count);
        debug_assert!(transition.to < self.state_count);
        self.transitions.push(transition);
    }

    /// Absorb `other`'s transitions with every endpoint shifted by `offset`.
    /// The caller has already accounted for `other`'s states in `state_count`.
    pub(crate) fn splice(&mut self, other: Nfa, offset: usize) {
        for t in other.transitions {
            self.push(Transition {
                from: t.from + offset,
                symbol: t.symbol,
                to: t.to + offset,
            });
        }
    }
}

/// One `(from, symbol, to)` triple per line; the host's display contract.
impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.transitions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "({}, {}, {})", t.from, t.symbol, t.to)?;
        }
        Ok(())
    }
}

impl Serialize for Nfa {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Nfa", 3)?;
        s.serialize_field("state_count", &self.state_count)?;
        s.serialize_field("transitions", &self.transitions)?;
        s.serialize_field("final_state", &self.final_state())?;
        s.end()
    }
}
