use itertools::Itertools;
use tracing::{debug, trace};

use crate::prelude::*;

use super::partition::{names, BlockId};

/// For every symbol of the alphabet (in ascending order), the block that the successor of a state
/// lies in, or `None` if the transition is undefined.
pub(super) type Signature = Vec<Option<BlockId>>;

pub(super) fn signature(
    dfa: &Automaton,
    partition: &Partition,
    alphabet: &[Symbol],
    q: StateIndex,
) -> Signature {
    alphabet
        .iter()
        .map(|&symbol| dfa.successor(q, symbol).and_then(|p| partition.block_of(p)))
        .collect()
}

/// Computes the coarsest partition of the states of `dfa` in which two states share a block iff
/// no finite word distinguishes them, using Moore's algorithm. A missing transition is treated as
/// a successor of its own that differs from every block.
///
/// Starting from the split into final and non-final states, every pass computes the signature
/// of each state in a block of size at least two under the partition as it was at the start of
/// the pass, and splits the block by signature. Once a pass leaves every block intact, the
/// partition is stable. Every split increases the number of blocks, so there are at most as many
/// passes as there are states.
pub fn moore_partition_refinement<O: RefinementObserver>(
    dfa: &Automaton,
    mut observer: O,
) -> Partition {
    let alphabet = dfa.alphabet().iter().copied().collect_vec();
    let mut partition = Partition::initial(dfa);
    debug!(
        "refining {} states over {} symbols, starting with {} blocks",
        dfa.size(),
        alphabet.len(),
        partition.len()
    );

    let mut pass = 0;
    loop {
        pass += 1;
        let mut splits = vec![];

        for (id, block) in partition.blocks().enumerate() {
            if block.len() < 2 {
                continue;
            }
            let groups = block
                .iter()
                .copied()
                .into_group_map_by(|&q| signature(dfa, &partition, &alphabet, q));
            if groups.len() < 2 {
                continue;
            }

            let groups = groups
                .into_values()
                .sorted_by_key(|group| partition.rank(group[0]))
                .collect_vec();
            trace!("pass {pass}: block {id} falls apart into {} groups", groups.len());
            observer.block_split(RefinementEvent {
                pass,
                before: names(dfa, block),
                after: groups.iter().map(|group| names(dfa, group)).collect(),
            });
            splits.push((id, groups));
        }

        let stable = splits.is_empty();
        partition.apply_splits(splits);
        observer.pass_completed(pass, &partition);
        if stable {
            break;
        }
    }

    debug!(
        "partition refinement stabilized after {pass} passes with {} blocks",
        partition.len()
    );
    partition
}
