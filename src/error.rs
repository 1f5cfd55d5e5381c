use thiserror::Error;

use crate::automaton::Symbol;

/// Everything that can go wrong when building, running or minimizing an [`crate::Automaton`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A state with the given name has already been added.
    #[error("state \"{0}\" already exists")]
    DuplicateState(String),
    /// A transition or flag update refers to a state that was never added.
    #[error("unknown state \"{0}\"")]
    UnknownState(String),
    /// A transition on `symbol` leaving `state` is already defined.
    #[error("state \"{state}\" already has a transition on '{symbol}'")]
    NonDeterministicTransition {
        /// Name of the source state.
        state: String,
        /// The symbol that is already taken.
        symbol: Symbol,
    },
    /// The automaton has no designated start state.
    #[error("no start state is configured")]
    NoStartState,
    /// More than one state claims to be the start state.
    #[error("multiple start states: {}", .0.join(", "))]
    MultipleStartStates(Vec<String>),
    /// The automaton cannot hold more states than [`crate::automaton::StateIndex`] can address.
    #[error("cannot add more than {0} states")]
    TooManyStates(usize),
    /// A partition covers a different number of states than the automaton it is applied to.
    #[error("partition covers {found} states, but the automaton has {expected}")]
    PartitionMismatch {
        /// Number of states of the automaton.
        expected: usize,
        /// Number of states covered by the partition.
        found: usize,
    },
    /// The members of a block disagree on finality or on the block some symbol leads to, so the
    /// block cannot be collapsed into a single state.
    #[error("block [{}] is not stable", .0.join(", "))]
    UnstablePartition(Vec<String>),
}
