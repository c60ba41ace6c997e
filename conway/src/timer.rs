// timer.rs - Single-shot tick deadline
//
// Holds at most one pending deadline. Arming replaces whatever was pending,
// so two timer chains can never run side by side.

use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        if self.deadline.is_some() {
            log::trace!("replacing pending tick");
        }
        self.deadline = Some(now + delay);
    }

    /// Returns whether a tick was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consumes the deadline if it has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
