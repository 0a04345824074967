use crate::domain::ports::{PresentationSurface, Scheduler, Task};
use std::time::Duration;

/// A scheduler driven by explicit calls to [`ManualScheduler::advance`].
///
/// Tasks run in due-time order; tasks due at the same time run in the
/// order they were scheduled.
#[derive(Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    pending: Vec<(Duration, u64, Task)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward by `by` and runs every task now due.
    /// Returns how many ran.
    pub fn advance(&mut self, by: Duration, surface: &mut dyn PresentationSurface) -> usize {
        self.now += by;

        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(at, _, _)| *at <= self.now);
        self.pending = rest;

        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        let ran = due.len();
        for (_, _, task) in due {
            task(surface);
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push((self.now + delay, seq, task));
    }
}
