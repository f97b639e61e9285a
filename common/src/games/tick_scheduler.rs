use std::time::Duration;

/// Frame gate that turns a stream of frame timestamps into fixed-interval ticks.
///
/// Timestamps are offsets from any fixed origin (typically the first frame).
/// When frames stall, the schedule is pulled forward so that at most one
/// catch-up tick fires instead of a burst.
#[derive(Clone, Debug, Default)]
pub struct TickScheduler {
    next_tick: Duration,
    cancelled: bool,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Duration, step_time: Duration) -> bool {
        if self.cancelled || now < self.next_tick {
            return false;
        }

        let lag_floor = now.saturating_sub(step_time.mul_f64(1.5));
        self.next_tick = self.next_tick.max(lag_floor) + step_time;
        true
    }

    /// Stops all future ticks. Cannot be undone.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn next_tick(&self) -> Duration {
        self.next_tick
    }
}
