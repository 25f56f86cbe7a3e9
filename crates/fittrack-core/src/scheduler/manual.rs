use std::time::Duration;

use super::TickScheduler;

/// Scheduler for tests and step-by-step drivers.
///
/// Nothing fires on its own; the caller decides when a tick happens and
/// can inspect how the host armed and cancelled the source.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    period: Option<Duration>,
    armed: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Times the source has been armed.
    pub fn armed_count(&self) -> usize {
        self.armed
    }

    /// Times an armed source has been torn down.
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule_repeating(&mut self, period: Duration) {
        self.period = Some(period);
        self.armed += 1;
    }

    fn cancel(&mut self) {
        if self.period.take().is_some() {
            self.cancelled += 1;
        }
    }

    fn is_scheduled(&self) -> bool {
        self.period.is_some()
    }
}
