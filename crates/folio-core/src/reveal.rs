use crate::constants::{CARD_STAGGER_MS, WORKFLOW_NODE_BASE_DELAY_MS, WORKFLOW_NODE_STAGGER_MS};
use fnv::FnvHashSet;
use smallvec::SmallVec;
use std::time::Duration;

pub type DelaySchedule = SmallVec<[Duration; 16]>;

/// `base + i * step` for each of `count` items.
pub fn stagger(count: usize, base_ms: u64, step_ms: u64) -> DelaySchedule {
    (0..count as u64)
        .map(|i| Duration::from_millis(base_ms + i * step_ms))
        .collect()
}

#[inline]
pub fn card_delays(count: usize) -> DelaySchedule {
    stagger(count, 0, CARD_STAGGER_MS)
}

#[inline]
pub fn workflow_node_delays(count: usize) -> DelaySchedule {
    stagger(count, WORKFLOW_NODE_BASE_DELAY_MS, WORKFLOW_NODE_STAGGER_MS)
}

/// Remembers which targets have already been revealed.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    seen: FnvHashSet<u32>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time `target` is seen, `false` afterwards.
    pub fn reveal(&mut self, target: u32) -> bool {
        self.seen.insert(target)
    }

    pub fn is_revealed(&self, target: u32) -> bool {
        self.seen.contains(&target)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
