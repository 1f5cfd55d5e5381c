use tracing::debug;

use crate::prelude::*;

/// Generates a random [`Automaton`] with `size` states named `s0`, `s1`, ... over the first
/// `symbols` letters of the alphabet, starting from `a`. State `s0` is the start state and each
/// state is final with probability one half. For every state and symbol, a transition to a
/// uniformly drawn target is added with probability `density`, so the result is in general
/// partial and may contain unreachable states.
///
/// Passing a seeded [`fastrand::Rng`] makes the result reproducible.
pub fn generate_random_dfa(
    rng: &mut fastrand::Rng,
    symbols: usize,
    size: usize,
    density: f64,
) -> Result<Automaton, AutomatonError> {
    assert!(symbols <= 26, "Alphabet is too large");
    let alphabet = (0..symbols).map(|i| (b'a' + i as u8) as char).collect::<Vec<_>>();
    let name = |i: usize| format!("s{i}");

    let mut dfa = Automaton::new();
    for i in 0..size {
        dfa.add_state(State::with_flags(name(i), i == 0, rng.bool()))?;
    }
    for i in 0..size {
        for &symbol in &alphabet {
            if rng.f64() < density {
                let target = rng.usize(..size);
                dfa.add_transition(&name(i), symbol, &name(target))?;
            }
        }
    }

    debug!(
        "generated random automaton with {size} states and {} transitions",
        dfa.transitions().count()
    );
    Ok(dfa)
}
