use std::time::{Duration, Instant};

use tracing::debug;

/// Fixed-period tick timer driven by the caller's clock.
///
/// Ticks are reported through [`TickScheduler::poll`]. After [`TickScheduler::cancel`]
/// no further tick is ever reported until the timer is started again.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    period: Duration,
    next_due: Option<Instant>,
}

impl TickScheduler {
    /// Creates a stopped scheduler with the given period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arms the timer; the first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            debug!("tick scheduler cancelled");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when a tick is due at `now` and schedules the following one.
    ///
    /// At most one tick is reported per call; a late caller does not get a burst of
    /// catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };

        if now < due {
            return false;
        }

        self.next_due = Some(now + self.period);
        true
    }

    /// Time left until the next tick, or `None` when stopped.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
