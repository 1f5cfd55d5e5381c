use std::collections::{BTreeSet, VecDeque};

use bit_set::BitSet;
use itertools::Itertools;
use tracing::trace;

use crate::{
    math::{Bijection, Map},
    AutomatonError,
};

use super::{State, StateIndex, Symbol, Transition};

/// A deterministic finite automaton over single-character symbols.
///
/// States live in an arena and are addressed by a [`StateIndex`], the mapping between names and
/// indices is kept in a [`Bijection`]. The transition function is partial: for a state and a symbol
/// there is at most one successor, and there may be none at all. The alphabet consists of exactly
/// those symbols that appear on at least one transition.
///
/// # Example
/// ```
/// use dfa_minimize::prelude::*;
///
/// let mut dfa = Automaton::new();
/// dfa.add_state(State::initial("even")).unwrap();
/// dfa.add_state(State::accepting("odd")).unwrap();
/// dfa.add_transition("even", 'a', "odd").unwrap();
/// dfa.add_transition("odd", 'a', "even").unwrap();
///
/// assert_eq!(dfa.accepts("aaa".chars()), Ok(true));
/// assert_eq!(dfa.accepts("aa".chars()), Ok(false));
/// assert_eq!(dfa.accepts("ab".chars()), Ok(false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    states: Vec<State>,
    names: Bijection<String, StateIndex>,
    edges: Map<(StateIndex, Symbol), StateIndex>,
    alphabet: BTreeSet<Symbol>,
    start: Option<StateIndex>,
}

impl Automaton {
    /// Creates an empty automaton without states or transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`. If its start flag is set it becomes the start state, fails if a
    /// start state is already present. Fails as well if the name is already taken.
    pub fn add_state(&mut self, state: State) -> Result<StateIndex, AutomatonError> {
        if self.names.contains_left(state.name()) {
            return Err(AutomatonError::DuplicateState(state.name().to_string()));
        }
        if state.is_start() {
            if let Some(existing) = self.start {
                return Err(AutomatonError::MultipleStartStates(vec![
                    self.states[existing as usize].name().to_string(),
                    state.name().to_string(),
                ]));
            }
        }

        let index = index_for(self.states.len())?;
        trace!("adding state {state:?} with index {index}");
        if state.is_start() {
            self.start = Some(index);
        }
        self.names.insert(state.name().to_string(), index);
        self.states.push(state);
        Ok(index)
    }

    /// Adds the transition `from --symbol--> to`. Both states must already be present, and
    /// `from` may not have a transition on `symbol` yet. An existing transition is never
    /// overwritten.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: Symbol,
        to: &str,
    ) -> Result<(), AutomatonError> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        if self.edges.contains_key(&(source, symbol)) {
            return Err(AutomatonError::NonDeterministicTransition {
                state: from.to_string(),
                symbol,
            });
        }

        trace!("adding transition {from} --{symbol}--> {to}");
        self.edges.insert((source, symbol), target);
        self.alphabet.insert(symbol);
        Ok(())
    }

    /// Makes the state with the given name the start state. The previous start state, if any,
    /// loses its start flag.
    pub fn set_start(&mut self, name: &str) -> Result<(), AutomatonError> {
        let index = self.resolve(name)?;
        if let Some(previous) = self.start.replace(index) {
            self.states[previous as usize].set_start(false);
        }
        self.states[index as usize].set_start(true);
        Ok(())
    }

    /// Sets or clears the final flag of the state with the given name.
    pub fn set_final(&mut self, name: &str, is_final: bool) -> Result<(), AutomatonError> {
        let index = self.resolve(name)?;
        self.states[index as usize].set_final(is_final);
        Ok(())
    }

    fn resolve(&self, name: &str) -> Result<StateIndex, AutomatonError> {
        self.index_of(name)
            .ok_or_else(|| AutomatonError::UnknownState(name.to_string()))
    }

    /// Returns the index of the state with the given name.
    pub fn index_of(&self, name: &str) -> Option<StateIndex> {
        self.names.get_by_left(name).copied()
    }

    /// Returns the state with the given index.
    pub fn state(&self, index: StateIndex) -> Option<&State> {
        self.states.get(index as usize)
    }

    /// Looks up a state by its name.
    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        self.index_of(name).and_then(|index| self.state(index))
    }

    /// Returns true if a state with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_left(name)
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the automaton has no states at all.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over all states in the order in which they were added.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }

    /// Iterates over the indices of all states.
    pub fn state_indices(&self) -> impl Iterator<Item = StateIndex> {
        // `add_state` keeps the number of states addressable
        (0..self.states.len()).filter_map(|index| StateIndex::try_from(index).ok())
    }

    /// The alphabet, i.e. every symbol that labels at least one transition, in ascending order.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// The designated start state, if there is one.
    pub fn start_state(&self) -> Option<&State> {
        self.start.and_then(|index| self.state(index))
    }

    /// The index of the start state, if there is one.
    pub fn start_index(&self) -> Option<StateIndex> {
        self.start
    }

    /// Iterates over all final states in the order in which they were added.
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().filter(|q| q.is_final())
    }

    /// Returns the index of the successor of `state` on `symbol`, if that transition is defined.
    pub fn successor(&self, state: StateIndex, symbol: Symbol) -> Option<StateIndex> {
        self.edges.get(&(state, symbol)).copied()
    }

    /// Returns the successor of the state named `state` on `symbol`. Gives `None` if the state
    /// does not exist or has no transition on `symbol`.
    pub fn next(&self, state: &str, symbol: Symbol) -> Option<&State> {
        self.index_of(state)
            .and_then(|index| self.successor(index, symbol))
            .and_then(|target| self.state(target))
    }

    /// Enumerates all transitions, ordered by the source state (in insertion order) and then
    /// by symbol.
    pub fn transitions(&self) -> impl Iterator<Item = Transition<'_>> + '_ {
        self.edges
            .iter()
            .sorted_by_key(|((source, symbol), _)| (*source, *symbol))
            .map(|(&(source, symbol), &target)| {
                Transition::new(
                    &self.states[source as usize],
                    symbol,
                    &self.states[target as usize],
                )
            })
    }

    /// Runs `word` from the start state. A symbol without a defined transition rejects the
    /// word immediately, otherwise the word is accepted iff the reached state is final.
    pub fn accepts<W>(&self, word: W) -> Result<bool, AutomatonError>
    where
        W: IntoIterator<Item = Symbol>,
    {
        let mut current = self.start.ok_or(AutomatonError::NoStartState)?;
        for symbol in word {
            match self.successor(current, symbol) {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(self.states[current as usize].is_final())
    }

    /// Returns the states that can be reached from the start state, in breadth-first order.
    /// Without a start state, nothing is reachable.
    pub fn reachable_states(&self) -> Vec<&State> {
        let Some(start) = self.start else {
            return vec![];
        };

        let mut seen = BitSet::with_capacity(self.size());
        let mut queue = VecDeque::from([start]);
        let mut out = vec![];
        seen.insert(start as usize);

        while let Some(q) = queue.pop_front() {
            out.push(&self.states[q as usize]);
            for &symbol in &self.alphabet {
                if let Some(p) = self.successor(q, symbol) {
                    if seen.insert(p as usize) {
                        queue.push_back(p);
                    }
                }
            }
        }
        out
    }

    /// Builds a table with one row per state (sorted by name) and one column per symbol.
    /// The start state is prefixed with `->` and final states are suffixed with `*`.
    pub fn transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet.iter().map(|s| s.to_string())),
        );
        for q in self.state_indices().sorted_by_key(|q| self.states[*q as usize].name()) {
            let state = &self.states[q as usize];
            let mut row = vec![format!(
                "{}{}{}",
                if state.is_start() { "->" } else { "" },
                state.name(),
                if state.is_final() { "*" } else { "" }
            )];
            for &symbol in &self.alphabet {
                match self.successor(q, symbol) {
                    Some(p) => row.push(self.states[p as usize].name().to_string()),
                    None => row.push("-".to_string()),
                }
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

/// The index for the state added after `len` others.
fn index_for(len: usize) -> Result<StateIndex, AutomatonError> {
    StateIndex::try_from(len).map_err(|_| AutomatonError::TooManyStates(len))
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.transition_table())
    }
}
