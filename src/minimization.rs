//! Minimization of deterministic finite automata by partition refinement.
//!
//! Minimizing happens in two steps. First [`refine`] computes the partition of the states into
//! classes of states that no finite word can tell apart. Then [`build_minimized`] collapses every
//! class into a single state of a fresh [`Automaton`]. The input automaton is only read.
mod partition;
pub use partition::{BlockId, Partition};

pub(crate) mod partition_refinement;

mod quotient;
pub use quotient::build_minimized;

mod trace;
pub use trace::{RefinementEvent, RefinementObserver, TracingObserver};

#[cfg(all(test, feature = "random"))]
mod properties;

use crate::prelude::*;

/// Computes the partition of the states of `dfa` into equivalence classes. Two states end up in
/// the same block iff they accept the same words.
pub fn refine(dfa: &Automaton) -> Partition {
    partition_refinement::moore_partition_refinement(dfa, ())
}

/// Works as [`refine`], but reports every split and every completed pass to `observer`.
pub fn refine_with<O: RefinementObserver>(dfa: &Automaton, observer: O) -> Partition {
    partition_refinement::moore_partition_refinement(dfa, observer)
}

/// Returns the minimal automaton accepting the same language as `dfa`. Fails if `dfa` has no
/// start state.
pub fn minimize(dfa: &Automaton) -> Result<Automaton, AutomatonError> {
    minimize_with(dfa, ())
}

/// Works as [`minimize`], but reports the refinement to `observer`.
pub fn minimize_with<O: RefinementObserver>(
    dfa: &Automaton,
    observer: O,
) -> Result<Automaton, AutomatonError> {
    if dfa.start_index().is_none() {
        return Err(AutomatonError::NoStartState);
    }
    let partition = refine_with(dfa, observer);
    build_minimized(dfa, &partition)
}

impl Automaton {
    /// Returns the unique (up to renaming of states) automaton with the fewest states that
    /// accepts the same language as `self`. States that cannot be reached from the start state
    /// are kept and merged like any other state.
    ///
    /// A missing transition counts as its own kind of successor, so a state without a transition
    /// on some symbol is never merged with one that moves into a rejecting sink on it. For
    /// automata with a total transition function this makes no difference.
    ///
    /// # Example
    /// ```
    /// use dfa_minimize::prelude::*;
    ///
    /// // p and q both accept exactly the words containing a `b`
    /// let dfa = Automaton::builder()
    ///     .with_states([("p", true, false), ("q", false, false), ("r", false, true)])
    ///     .with_transitions([
    ///         ("p", 'a', "q"), ("p", 'b', "r"),
    ///         ("q", 'a', "q"), ("q", 'b', "r"),
    ///         ("r", 'a', "r"), ("r", 'b', "r"),
    ///     ])
    ///     .build()
    ///     .unwrap();
    /// let minimized = dfa.minimize().unwrap();
    /// assert_eq!(minimized.size(), 2);
    /// assert_eq!(minimized.accepts("aab".chars()), Ok(true));
    /// ```
    pub fn minimize(&self) -> Result<Automaton, AutomatonError> {
        minimize(self)
    }

    /// Minimizes `self` while reporting the partition refinement to `observer`.
    pub fn minimize_with<O: RefinementObserver>(
        &self,
        observer: O,
    ) -> Result<Automaton, AutomatonError> {
        minimize_with(self, observer)
    }
}
