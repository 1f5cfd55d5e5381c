//! Properties of minimization checked over seeded random automata.

use itertools::Itertools;

use crate::{prelude::*, random::generate_random_dfa};

const SEEDS: u64 = 60;

fn random_dfas() -> impl Iterator<Item = Automaton> {
    (0..SEEDS).map(|seed| {
        let mut rng = fastrand::Rng::with_seed(seed);
        let size = 1 + (seed as usize % 9);
        let density = [1.0, 0.85, 0.6][seed as usize % 3];
        generate_random_dfa(&mut rng, 2, size, density).unwrap()
    })
}

fn words(dfa: &Automaton, max_len: usize) -> Vec<Vec<char>> {
    let alphabet = dfa.alphabet().iter().copied().collect_vec();
    let mut out = vec![vec![]];
    for len in 1..=max_len {
        out.extend(
            itertools::repeat_n(alphabet.iter().copied(), len).multi_cartesian_product(),
        );
    }
    out
}

fn accepts_from(dfa: &Automaton, mut q: StateIndex, word: &[char]) -> bool {
    for &symbol in word {
        match dfa.successor(q, symbol) {
            Some(p) => q = p,
            None => return false,
        }
    }
    dfa.state(q).is_some_and(State::is_final)
}

#[test]
fn minimization_preserves_the_language() {
    for dfa in random_dfas() {
        let minimized = dfa.minimize().unwrap();
        for word in words(&dfa, 7) {
            assert_eq!(
                dfa.accepts(word.iter().copied()),
                minimized.accepts(word.iter().copied()),
                "disagreement on {word:?} for\n{dfa}\nminimized to\n{minimized}"
            );
        }
    }
}

#[test]
fn minimization_never_adds_states() {
    for dfa in random_dfas() {
        let minimized = dfa.minimize().unwrap();
        assert!(minimized.size() <= dfa.size());
        assert_eq!(minimized.size(), refine(&dfa).len());
        assert_eq!(minimized.alphabet(), dfa.alphabet());
    }
}

fn is_complete(dfa: &Automaton) -> bool {
    dfa.state_indices()
        .cartesian_product(dfa.alphabet().iter().copied())
        .all(|(q, symbol)| dfa.successor(q, symbol).is_some())
}

#[test]
fn blocks_are_exactly_the_equivalence_classes() {
    let mut complete = 0;
    for dfa in random_dfas() {
        let partition = refine(&dfa);
        // two states are equivalent iff they agree on all words up to the number of states
        let words = words(&dfa, dfa.size());
        for (p, q) in dfa.state_indices().collect::<Vec<_>>().into_iter().tuple_combinations() {
            let equivalent = words
                .iter()
                .all(|w| accepts_from(&dfa, p, w) == accepts_from(&dfa, q, w));
            if partition.same_block(p, q) {
                assert!(equivalent);
            }
            // an undefined transition is never merged with a transition into a rejecting sink
            if is_complete(&dfa) {
                assert_eq!(partition.same_block(p, q), equivalent);
            }
        }
        complete += usize::from(is_complete(&dfa));
    }
    assert!(complete > 0);
}

#[test]
fn minimization_is_idempotent() {
    for dfa in random_dfas() {
        let once = dfa.minimize().unwrap();
        let twice = once.minimize().unwrap();
        assert_eq!(once.size(), twice.size());
        assert_eq!(once.transitions().count(), twice.transitions().count());

        // every state of `once` is alone in its block, the renaming goes through block ids
        let partition = refine(&once);
        assert!(partition.blocks().all(|block| block.len() == 1));
        let rename = |name: &str| {
            let index = once.index_of(name).unwrap();
            format!("q{}", partition.block_of(index).unwrap())
        };
        for t in once.transitions() {
            let renamed = rename(t.to().name());
            assert_eq!(
                twice.next(&rename(t.from().name()), t.symbol()).map(State::name),
                Some(renamed.as_str())
            );
        }
        for q in once.states() {
            let renamed = twice.state_by_name(&rename(q.name())).unwrap();
            assert_eq!(renamed.is_final(), q.is_final());
            assert_eq!(renamed.is_start(), q.is_start());
        }
    }
}

#[test]
fn partition_stays_valid_in_every_pass() {
    struct Check<'a> {
        dfa: &'a Automaton,
        passes: usize,
        splits: usize,
    }

    impl RefinementObserver for Check<'_> {
        fn block_split(&mut self, event: RefinementEvent) {
            assert!(event.after.len() > 1);
            assert_eq!(
                event.after.concat().into_iter().sorted().collect_vec(),
                event.before
            );
            self.splits += 1;
        }

        fn pass_completed(&mut self, pass: usize, partition: &Partition) {
            self.passes = pass;
            let members = partition.blocks().flatten().copied().sorted().collect_vec();
            assert_eq!(members, self.dfa.state_indices().collect_vec());
            for block in partition.blocks() {
                assert!(!block.is_empty());
                let finals = block
                    .iter()
                    .filter(|q| self.dfa.state(**q).unwrap().is_final())
                    .count();
                assert!(finals == 0 || finals == block.len());
            }
        }
    }

    for dfa in random_dfas() {
        let mut check = Check {
            dfa: &dfa,
            passes: 0,
            splits: 0,
        };
        let partition = refine_with(&dfa, &mut check);
        let initial = Partition::initial(&dfa).len();
        assert!(check.passes <= dfa.size().max(1));
        assert!(check.splits <= partition.len() - initial);
    }
}
