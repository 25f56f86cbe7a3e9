//! Tick sources for the workout timer.
//!
//! The timer never reads a clock. A [`TickScheduler`] is armed while the
//! timer runs and torn down whenever it stops; whoever owns the scheduler
//! feeds each delivered tick back into the timer.
//!
//! - [`ManualScheduler`]: records arm/cancel calls, ticks are delivered by hand
//! - [`IntervalScheduler`]: tokio interval task forwarding ticks over a channel

mod interval;
mod manual;

pub use interval::IntervalScheduler;
pub use manual::ManualScheduler;

use std::time::Duration;

/// Period of one timer tick in real time.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// A repeating tick source that can be armed and cancelled.
pub trait TickScheduler {
    /// Start delivering a tick every `period`. Arming an already armed
    /// scheduler replaces the previous schedule.
    fn schedule_repeating(&mut self, period: Duration);

    /// Stop delivering ticks. No tick from the cancelled schedule may be
    /// observed afterwards.
    fn cancel(&mut self);

    fn is_scheduled(&self) -> bool;
}
