use itertools::Itertools;

use crate::prelude::*;

/// Identifies a block of a [`Partition`]. Ids are positions in the canonical block order and are
/// only meaningful for the partition that produced them.
pub type BlockId = usize;

/// A partition of the states of an [`Automaton`] into disjoint, non-empty blocks.
///
/// Blocks are stored in an arena indexed by [`BlockId`] and every state knows the id of the block
/// it belongs to, which makes membership tests constant time. The partition is kept canonical:
/// the members of a block are sorted by name and blocks are ordered by their smallest member
/// name. Two partitions of the same automaton that group the states in the same way are
/// therefore equal, no matter how they came about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    blocks: Vec<Vec<StateIndex>>,
    block_of: Vec<BlockId>,
    rank: Vec<usize>,
}

impl Partition {
    /// Splits the states of `dfa` into final and non-final ones, omitting either block if it
    /// would be empty.
    pub fn initial(dfa: &Automaton) -> Self {
        let rank = name_ranks(dfa);
        let (accepting, rejecting): (Vec<_>, Vec<_>) = dfa
            .state_indices()
            .partition(|q| dfa.state(*q).is_some_and(State::is_final));

        let mut partition = Self {
            blocks: [accepting, rejecting]
                .into_iter()
                .filter(|block| !block.is_empty())
                .collect(),
            block_of: vec![0; dfa.size()],
            rank,
        };
        partition.canonicalize();
        partition
    }

    /// Replaces each block listed in `splits` by the given groups. Each list of groups must
    /// partition the block it replaces. The result is brought back into canonical order.
    pub(crate) fn apply_splits(&mut self, splits: Vec<(BlockId, Vec<Vec<StateIndex>>)>) {
        for (id, groups) in splits {
            let mut groups = groups.into_iter();
            if let Some(first) = groups.next() {
                self.blocks[id] = first;
            }
            self.blocks.extend(groups);
        }
        self.canonicalize();
    }

    fn canonicalize(&mut self) {
        let rank = &self.rank;
        for block in self.blocks.iter_mut() {
            block.sort_by_key(|q| rank[*q as usize]);
        }
        self.blocks.sort_by_key(|block| rank[block[0] as usize]);
        for (id, block) in self.blocks.iter().enumerate() {
            for q in block {
                self.block_of[*q as usize] = id;
            }
        }
    }

    /// Position of the state in the ordering of all states by name.
    pub(crate) fn rank(&self, q: StateIndex) -> usize {
        self.rank[q as usize]
    }

    /// The number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if there are no blocks, which happens precisely for an automaton without
    /// states.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The number of states covered by the partition.
    pub fn state_count(&self) -> usize {
        self.block_of.len()
    }

    /// Iterates over the blocks in canonical order.
    pub fn blocks(&self) -> impl Iterator<Item = &[StateIndex]> + '_ {
        self.blocks.iter().map(|block| block.as_slice())
    }

    /// Returns the members of the block with the given id.
    pub fn block(&self, id: BlockId) -> Option<&[StateIndex]> {
        self.blocks.get(id).map(|block| block.as_slice())
    }

    /// Returns the id of the block containing `q`.
    pub fn block_of(&self, q: StateIndex) -> Option<BlockId> {
        self.block_of.get(q as usize).copied()
    }

    /// Returns true if `p` and `q` are in the same block.
    pub fn same_block(&self, p: StateIndex, q: StateIndex) -> bool {
        match (self.block_of(p), self.block_of(q)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Resolves every block to the names of its members.
    pub fn named_blocks(&self, dfa: &Automaton) -> Vec<Vec<String>> {
        self.blocks
            .iter()
            .map(|block| names(dfa, block))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a [StateIndex];
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Vec<StateIndex>>,
        fn(&'a Vec<StateIndex>) -> &'a [StateIndex],
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks
            .iter()
            .map(Vec::as_slice as fn(&'a Vec<StateIndex>) -> &'a [StateIndex])
    }
}

pub(crate) fn names(dfa: &Automaton, states: &[StateIndex]) -> Vec<String> {
    states
        .iter()
        .filter_map(|q| dfa.state(*q))
        .map(|q| q.name().to_string())
        .collect()
}

fn name_ranks(dfa: &Automaton) -> Vec<usize> {
    let mut rank = vec![0; dfa.size()];
    for (position, q) in dfa
        .state_indices()
        .sorted_by_key(|q| dfa.state(*q).map(State::name))
        .enumerate()
    {
        rank[q as usize] = position;
    }
    rank
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn initial_partition_is_canonical() {
        let dfa = Automaton::builder()
            .with_states([
                ("d", false, true),
                ("b", true, false),
                ("a", false, true),
                ("c", false, false),
            ])
            .build()
            .unwrap();
        let partition = Partition::initial(&dfa);
        assert_eq!(partition.len(), 2);
        assert_eq!(
            partition.named_blocks(&dfa),
            vec![vec!["a", "d"], vec!["b", "c"]]
        );

        let a = dfa.index_of("a").unwrap();
        let d = dfa.index_of("d").unwrap();
        let c = dfa.index_of("c").unwrap();
        assert_eq!(partition.block_of(a), Some(0));
        assert!(partition.same_block(a, d));
        assert!(!partition.same_block(a, c));
        assert_eq!(partition.block(0), Some(&[a, d][..]));
        assert_eq!(partition.block(2), None);
        assert_eq!(partition.state_count(), 4);
        assert_eq!(
            partition.blocks().map(<[StateIndex]>::len).collect::<Vec<_>>(),
            vec![2, 2]
        );
    }

    #[test]
    fn initial_partition_omits_empty_blocks() {
        let all_rejecting = Automaton::builder()
            .with_states([("p", true, false), ("q", false, false)])
            .build()
            .unwrap();
        assert_eq!(Partition::initial(&all_rejecting).len(), 1);

        let empty = Automaton::new();
        assert!(Partition::initial(&empty).is_empty());
    }

    #[test]
    fn splitting_recomputes_ids() {
        let dfa = Automaton::builder()
            .with_states([("x", true, false), ("y", false, false), ("z", false, true)])
            .build()
            .unwrap();
        let [x, y, z] = ["x", "y", "z"].map(|n| dfa.index_of(n).unwrap());
        let mut partition = Partition::initial(&dfa);
        assert_eq!(partition.block_of(z), Some(1));

        partition.apply_splits(vec![(0, vec![vec![y], vec![x]])]);
        assert_eq!(
            partition.named_blocks(&dfa),
            vec![vec!["x"], vec!["y"], vec!["z"]]
        );
        assert_eq!(partition.block_of(x), Some(0));
        assert_eq!(partition.block_of(z), Some(2));
        assert_eq!((&partition).into_iter().count(), 3);
    }
}
