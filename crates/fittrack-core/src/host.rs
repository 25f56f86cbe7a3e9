//! Host side of the workout timer.
//!
//! [`WorkoutHost`] owns one timer, one tick source and one observer. Every
//! command runs in three steps: the timer computes its new state and the
//! events it produced, the tick source is armed or torn down to match the
//! new running flag, and only then are the events handed to the observer.
//! Observers therefore never see a half-applied transition.

use std::time::Duration;

use tracing::debug;

use crate::catalog::Exercise;
use crate::events::Event;
use crate::scheduler::{TickScheduler, DEFAULT_TICK_PERIOD};
use crate::timer::WorkoutTimer;

/// Receiver of the timer's host callbacks.
pub trait WorkoutObserver {
    /// The last exercise's rest ran out, or was skipped. Called once per
    /// session.
    fn on_complete(&mut self);

    /// Another minute of session time elapsed. `minutes` is always 1.
    fn on_progress_update(&mut self, minutes: u32);

    /// Sees every event, including the two above, after they are dispatched.
    fn on_event(&mut self, _event: &Event) {}
}

pub struct WorkoutHost<S: TickScheduler, O: WorkoutObserver> {
    timer: WorkoutTimer,
    scheduler: S,
    observer: O,
    tick_period: Duration,
}

impl<S: TickScheduler, O: WorkoutObserver> WorkoutHost<S, O> {
    pub fn new(exercises: Vec<Exercise>, scheduler: S, observer: O) -> Self {
        Self {
            timer: WorkoutTimer::new(exercises),
            scheduler,
            observer,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    /// Real-time length of one timer second.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn timer(&self) -> &WorkoutTimer {
        &self.timer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn start(&mut self) -> Vec<Event> {
        let events = self.timer.start();
        self.commit(events)
    }

    pub fn pause(&mut self) -> Vec<Event> {
        let events = self.timer.pause();
        self.commit(events)
    }

    pub fn toggle(&mut self) -> Vec<Event> {
        let events = self.timer.toggle();
        self.commit(events)
    }

    /// Feed one delivered tick into the timer.
    pub fn tick(&mut self) -> Vec<Event> {
        let events = self.timer.tick();
        self.commit(events)
    }

    pub fn skip(&mut self) -> Vec<Event> {
        let events = self.timer.skip();
        self.commit(events)
    }

    pub fn reset(&mut self) -> Vec<Event> {
        let events = self.timer.reset();
        self.commit(events)
    }

    fn commit(&mut self, events: Vec<Event>) -> Vec<Event> {
        self.sync_scheduler();
        for event in &events {
            match event {
                Event::MinuteCompleted { minutes, .. } => {
                    self.observer.on_progress_update(*minutes)
                }
                Event::WorkoutCompleted { .. } => self.observer.on_complete(),
                _ => {}
            }
            self.observer.on_event(event);
        }
        events
    }

    /// Armed exactly while the timer runs.
    fn sync_scheduler(&mut self) {
        match (self.timer.is_running(), self.scheduler.is_scheduled()) {
            (true, false) => {
                debug!("timer running, arming tick source");
                self.scheduler.schedule_repeating(self.tick_period);
            }
            (false, true) => {
                debug!("timer stopped, tearing down tick source");
                self.scheduler.cancel();
            }
            _ => {}
        }
    }
}

impl<S: TickScheduler, O: WorkoutObserver> Drop for WorkoutHost<S, O> {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::scheduler::ManualScheduler;

    #[derive(Default)]
    struct Recorder {
        completions: usize,
        minutes: Vec<u32>,
        seen: usize,
    }

    impl WorkoutObserver for Recorder {
        fn on_complete(&mut self) {
            self.completions += 1;
        }

        fn on_progress_update(&mut self, minutes: u32) {
            self.minutes.push(minutes);
        }

        fn on_event(&mut self, _event: &Event) {
            self.seen += 1;
        }
    }

    fn host(n: usize) -> WorkoutHost<ManualScheduler, Recorder> {
        WorkoutHost::new(
            catalog::exercises().into_iter().take(n).collect(),
            ManualScheduler::new(),
            Recorder::default(),
        )
    }

    #[test]
    fn tick_source_follows_running_flag() {
        let mut h = host(2);
        assert!(!h.scheduler().is_scheduled());
        h.toggle();
        assert!(h.scheduler().is_scheduled());
        assert_eq!(h.scheduler().period(), Some(Duration::from_secs(1)));
        h.tick();
        assert_eq!(h.scheduler().armed_count(), 1);
        h.toggle();
        assert!(!h.scheduler().is_scheduled());
        assert_eq!(h.scheduler().cancelled_count(), 1);
    }

    #[test]
    fn completion_tears_down_tick_source() {
        let mut h = host(1);
        h.start();
        for _ in 0..60 {
            h.tick();
        }
        assert!(h.timer().is_complete());
        assert!(!h.scheduler().is_scheduled());
        assert_eq!(h.observer().completions, 1);
        assert_eq!(h.observer().minutes, vec![1]);
    }

    #[test]
    fn reset_tears_down_tick_source() {
        let mut h = host(2).with_tick_period(Duration::from_millis(10));
        h.start();
        assert_eq!(h.scheduler().period(), Some(Duration::from_millis(10)));
        h.reset();
        assert!(!h.scheduler().is_scheduled());
    }

    #[test]
    fn observer_sees_every_event() {
        let mut h = host(2);
        let mut total = h.start().len();
        for _ in 0..45 {
            total += h.tick().len();
        }
        assert_eq!(h.observer().seen, total);
    }
}
