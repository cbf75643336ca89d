use instant::Instant;
use std::time::Duration;

/// Trailing-edge debouncer driven by explicit timestamps.
///
/// Every `trigger` pushes the deadline out by `delay`; `poll` reports `true`
/// exactly once after the deadline passes with no further triggers. The host
/// polls from its frame loop, so no timer handles are involved.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
