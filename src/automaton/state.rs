use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

/// A single input symbol. Alphabets are made of plain characters.
pub type Symbol = char;

/// The type used for indexing states within an [`super::Automaton`]. An automaton holds at most
/// `u32::MAX + 1` states.
pub type StateIndex = u32;

/// A state of an automaton. Identity is determined by the name alone, the two flags
/// may change after creation without affecting equality or hashing.
#[derive(Clone)]
pub struct State {
    name: String,
    is_start: bool,
    is_final: bool,
}

impl State {
    /// Creates a state that is neither start nor final.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_flags(name, false, false)
    }

    /// Creates a state with explicitly given start and final flags.
    pub fn with_flags<S: Into<String>>(name: S, is_start: bool, is_final: bool) -> Self {
        Self {
            name: name.into(),
            is_start,
            is_final,
        }
    }

    /// Creates a non-final start state.
    pub fn initial<S: Into<String>>(name: S) -> Self {
        Self::with_flags(name, true, false)
    }

    /// Creates a final state that is not the start state.
    pub fn accepting<S: Into<String>>(name: S) -> Self {
        Self::with_flags(name, false, true)
    }

    /// The unique name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this is the designated start state.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Returns true if the state is accepting.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn set_start(&mut self, is_start: bool) {
        self.is_start = is_start;
    }

    pub(crate) fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.is_start {
            write!(f, "[start]")?;
        }
        if self.is_final {
            write!(f, "[final]")?;
        }
        Ok(())
    }
}

/// A transition of an automaton, borrowed from the automaton that defines it. Transitions
/// are never stored as such, they are produced on demand from the transition function.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition<'a> {
    from: &'a State,
    symbol: Symbol,
    to: &'a State,
}

impl<'a> Transition<'a> {
    /// Build a new transition from the given parts.
    pub fn new(from: &'a State, symbol: Symbol, to: &'a State) -> Self {
        Self { from, symbol, to }
    }

    /// The state in which the transition originates.
    pub fn from(&self) -> &'a State {
        self.from
    }

    /// The symbol on which the transition is taken.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The state the transition leads to.
    pub fn to(&self) -> &'a State {
        self.to
    }
}

impl Display for Transition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.symbol, self.to)
    }
}

impl Debug for Transition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.symbol, self.to)
    }
}
