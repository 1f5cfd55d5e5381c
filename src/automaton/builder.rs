use crate::AutomatonError;

use super::{Automaton, State, Symbol};

/// Helper struct for the construction of an [`Automaton`] in one go. It collects states and
/// transitions and only validates them when [`AutomatonBuilder::build`] is called, so the
/// first violation encountered is reported.
///
/// # Example
///
/// We want to create a DFA with two states `p` and `q` over the alphabet `['a', 'b']`, where `p` is
/// the start state and `q` is accepting. Reading `b` switches between the states.
/// ```
/// use dfa_minimize::prelude::*;
///
/// let dfa = Automaton::builder()
///     .with_states([("p", true, false), ("q", false, true)]) // (name, start, final)
///     .with_transitions([("p", 'a', "p"), ("p", 'b', "q"), ("q", 'a', "q"), ("q", 'b', "p")])
///     .build()
///     .unwrap();
/// assert_eq!(dfa.accepts("abab".chars()), Ok(false));
/// assert_eq!(dfa.accepts("aab".chars()), Ok(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    transitions: Vec<(String, Symbol, String)>,
    start: Option<String>,
    finals: Vec<String>,
}

impl Automaton {
    /// Returns an empty [`AutomatonBuilder`].
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }
}

impl AutomatonBuilder {
    /// Adds a single state.
    pub fn with_state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Adds states given as `(name, is_start, is_final)` triples, in order.
    pub fn with_states<I, S>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (S, bool, bool)>,
        S: Into<String>,
    {
        self.states.extend(
            iter.into_iter()
                .map(|(name, start, accepting)| State::with_flags(name, start, accepting)),
        );
        self
    }

    /// Adds transitions given as `(from, symbol, to)` triples.
    pub fn with_transitions<I, S, T>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (S, Symbol, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.transitions.extend(
            iter.into_iter()
                .map(|(from, symbol, to)| (from.into(), symbol, to.into())),
        );
        self
    }

    /// Designates the start state by name, after all states have been added.
    pub fn with_start<S: Into<String>>(mut self, name: S) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Marks the states with the given names as final, after all states have been added.
    pub fn with_finals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.finals.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validates everything and produces the [`Automaton`]. States are added first, then the
    /// start and final designations are applied, then the transitions.
    pub fn build(self) -> Result<Automaton, AutomatonError> {
        let mut dfa = Automaton::new();
        for state in self.states {
            dfa.add_state(state)?;
        }
        if let Some(start) = self.start {
            dfa.set_start(&start)?;
        }
        for name in self.finals {
            dfa.set_final(&name, true)?;
        }
        for (from, symbol, to) in self.transitions {
            dfa.add_transition(&from, symbol, &to)?;
        }
        Ok(dfa)
    }
}
