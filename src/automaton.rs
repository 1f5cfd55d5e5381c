mod state;
pub use state::{State, StateIndex, Symbol, Transition};

mod dfa;
pub use dfa::Automaton;

mod builder;
pub use builder::AutomatonBuilder;
