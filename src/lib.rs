//! Library for building deterministic finite automata (DFA) and minimizing them.
//!
//! An [`Automaton`] owns a set of uniquely named states, each of which may be flagged as the start
//! state or as final, together with a partial, deterministic transition function over single
//! character symbols. The alphabet is simply the set of symbols appearing on some transition.
//! Words are run with [`Automaton::accepts`], where reading a symbol for which no transition is
//! defined rejects the word.
//!
//! Minimization (behind the `minimize` feature, enabled by default) computes the coarsest
//! partition of the states into classes of states that accept the same words, using Moore's
//! algorithm of repeated block splitting, and then collapses each class into a single state. The
//! result is a fresh automaton, the input is never modified. The refinement can optionally be
//! observed through a [`minimization::RefinementObserver`].
//!
//! ```
//! use dfa_minimize::prelude::*;
//!
//! let dfa = Automaton::builder()
//!     .with_states([("q0", true, false), ("q1", false, true), ("q2", false, true)])
//!     .with_transitions([("q0", 'a', "q1"), ("q1", 'a', "q2"), ("q2", 'a', "q1")])
//!     .build()
//!     .unwrap();
//! let minimized = dfa.minimize().unwrap();
//! assert_eq!(minimized.size(), 2);
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_minimize::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        automaton::{Automaton, AutomatonBuilder, State, StateIndex, Symbol, Transition},
        AutomatonError,
    };

    #[cfg(feature = "minimize")]
    pub use super::minimization::{
        build_minimized, minimize, minimize_with, refine, refine_with, BlockId, Partition,
        RefinementEvent, RefinementObserver, TracingObserver,
    };
}

/// This module contains the collection types used throughout the crate.
pub mod math;

mod error;
pub use error::AutomatonError;

/// Defines states, transitions and the automaton that owns them.
pub mod automaton;
pub use automaton::Automaton;

#[cfg(feature = "minimize")]
pub mod minimization;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;
