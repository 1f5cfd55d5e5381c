use itertools::Itertools;
use tracing::{debug, trace};

use crate::{math::Set, prelude::*};

use super::{
    partition::names,
    partition_refinement::{signature, Signature},
};

/// Name of the state that represents the block with the given id.
pub(crate) fn block_name(id: BlockId) -> String {
    format!("q{id}")
}

/// Builds the quotient of `dfa` by `partition`, where the partition must be a congruence that
/// respects the split into final and non-final states (as produced by [`super::refine`]).
///
/// Every block becomes one state, named `q0`, `q1`, ... in canonical block order. A block is
/// final if its members are final and it is the start state if it contains the start state.
/// The transitions of a block are read off a single representative.
///
/// Fails with [`AutomatonError::NoStartState`] if `dfa` has no start state. An automaton never
/// holds more than one start state, [`Automaton::add_state`] rejects a second one with
/// [`AutomatonError::MultipleStartStates`]. A partition that covers a different number of states
/// is rejected with [`AutomatonError::PartitionMismatch`], and one with a block whose members
/// disagree on finality or on the block some symbol leads to (or whether it leads anywhere) with
/// [`AutomatonError::UnstablePartition`].
pub fn build_minimized(
    dfa: &Automaton,
    partition: &Partition,
) -> Result<Automaton, AutomatonError> {
    let start = dfa.start_index().ok_or(AutomatonError::NoStartState)?;
    if partition.state_count() != dfa.size() {
        return Err(AutomatonError::PartitionMismatch {
            expected: dfa.size(),
            found: partition.state_count(),
        });
    }
    check_stable(dfa, partition)?;

    let mut minimized = Automaton::new();
    for (id, block) in partition.blocks().enumerate() {
        let is_final = dfa.state(block[0]).is_some_and(State::is_final);
        minimized.add_state(State::with_flags(
            block_name(id),
            block.contains(&start),
            is_final,
        ))?;
    }

    for (id, block) in partition.blocks().enumerate() {
        let representative = block[0];
        for &symbol in dfa.alphabet() {
            let Some(target) = dfa.successor(representative, symbol) else {
                continue;
            };
            let Some(target_block) = partition.block_of(target) else {
                continue;
            };
            minimized.add_transition(&block_name(id), symbol, &block_name(target_block))?;
        }
    }

    debug!(
        "minimized automaton has {} states (from {})",
        minimized.size(),
        dfa.size()
    );
    Ok(minimized)
}

/// Every block must agree on finality and on the signature of its members.
fn check_stable(dfa: &Automaton, partition: &Partition) -> Result<(), AutomatonError> {
    let alphabet = dfa.alphabet().iter().copied().collect_vec();
    for block in partition.blocks() {
        let finality: Set<bool> = block
            .iter()
            .filter_map(|q| dfa.state(*q))
            .map(State::is_final)
            .collect();
        let signatures: Set<Signature> = block
            .iter()
            .map(|&q| signature(dfa, partition, &alphabet, q))
            .collect();
        if finality.len() > 1 || signatures.len() > 1 {
            trace!("block {:?} cannot be collapsed", names(dfa, block));
            return Err(AutomatonError::UnstablePartition(names(dfa, block)));
        }
    }
    Ok(())
}
