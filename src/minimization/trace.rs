use itertools::Itertools;
use tracing::debug;

use super::Partition;

/// Records that during refinement pass `pass`, the block `before` was split into the blocks
/// `after`. All states are given by name, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementEvent {
    /// Number of the refinement pass, starting at 1.
    pub pass: usize,
    /// The block as it was at the start of the pass.
    pub before: Vec<String>,
    /// The blocks that replace it.
    pub after: Vec<Vec<String>>,
}

/// Receives the trace of a partition refinement. Tracing is opt in, the refinement itself never
/// prints anything. Use `()` to discard the trace and a `Vec<RefinementEvent>` to collect it.
pub trait RefinementObserver {
    /// Called once for every block that is split.
    fn block_split(&mut self, event: RefinementEvent);

    /// Called at the end of every pass with the partition that the pass produced. The last pass
    /// is the one that no longer splits anything.
    fn pass_completed(&mut self, _pass: usize, _partition: &Partition) {}
}

impl RefinementObserver for () {
    fn block_split(&mut self, _event: RefinementEvent) {}
}

impl RefinementObserver for Vec<RefinementEvent> {
    fn block_split(&mut self, event: RefinementEvent) {
        self.push(event)
    }
}

impl<O: RefinementObserver + ?Sized> RefinementObserver for &mut O {
    fn block_split(&mut self, event: RefinementEvent) {
        (**self).block_split(event)
    }

    fn pass_completed(&mut self, pass: usize, partition: &Partition) {
        (**self).pass_completed(pass, partition)
    }
}

/// Forwards the trace to the `tracing` infrastructure at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RefinementObserver for TracingObserver {
    fn block_split(&mut self, event: RefinementEvent) {
        debug!(
            "pass {}: split [{}] into {}",
            event.pass,
            event.before.join(", "),
            event
                .after
                .iter()
                .map(|block| format!("[{}]", block.join(", ")))
                .join(" ")
        );
    }

    fn pass_completed(&mut self, pass: usize, partition: &Partition) {
        debug!("pass {pass} finished with {} blocks", partition.len());
    }
}
