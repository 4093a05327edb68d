//! Deadline bookkeeping for timed un-highlights.
//!
//! One deadline per node: re-scheduling a node replaces its pending deadline
//! instead of stacking a second one. Time is driven by the host (the widget
//! has no threads or timers of its own), so firing is an explicit poll.

use std::time::Instant;

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub(crate) struct UnhighlightQueue {
    deadlines: IndexMap<String, Instant>,
}

impl UnhighlightQueue {
    /// Schedules (or re-schedules) the un-highlight of `key`.
    pub(crate) fn schedule(&mut self, key: impl Into<String>, at: Instant) {
        self.deadlines.insert(key.into(), at);
    }

    pub(crate) fn cancel(&mut self, key: &str) -> bool {
        self.deadlines.shift_remove(key).is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.deadlines.clear();
    }

    pub(crate) fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Removes and returns every key whose deadline has passed.
    pub(crate) fn due(&mut self, now: Instant) -> Vec<String> {
        let expired: Vec<String> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            self.deadlines.shift_remove(key);
        }
        expired
    }
}
