//! Daily workout-minute accumulator fed by the timer host.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::host::WorkoutObserver;

pub const DEFAULT_GOAL_MINUTES: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressTracker {
    minutes_completed: u32,
    goal_minutes: u32,
    workouts_completed: u32,
}

impl ProgressTracker {
    pub fn new(goal_minutes: u32) -> Self {
        Self {
            minutes_completed: 0,
            goal_minutes,
            workouts_completed: 0,
        }
    }

    pub fn minutes_completed(&self) -> u32 {
        self.minutes_completed
    }

    pub fn goal_minutes(&self) -> u32 {
        self.goal_minutes
    }

    pub fn workouts_completed(&self) -> u32 {
        self.workouts_completed
    }

    /// 0.0 .. 1.0 toward the daily goal, capped once the goal is met.
    pub fn goal_fraction(&self) -> f64 {
        if self.goal_minutes == 0 {
            return 1.0;
        }
        (self.minutes_completed as f64 / self.goal_minutes as f64).min(1.0)
    }

    pub fn add_minutes(&mut self, minutes: u32) {
        self.minutes_completed = self.minutes_completed.saturating_add(minutes);
    }

    /// Clear accumulated workout data, keeping the goal.
    pub fn reset(&mut self) {
        self.minutes_completed = 0;
        self.workouts_completed = 0;
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_GOAL_MINUTES)
    }
}

impl WorkoutObserver for ProgressTracker {
    fn on_complete(&mut self) {
        self.workouts_completed += 1;
        info!(
            workouts = self.workouts_completed,
            minutes = self.minutes_completed,
            "workout recorded"
        );
    }

    fn on_progress_update(&mut self, minutes: u32) {
        self.add_minutes(minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_fraction_is_capped() {
        let mut p = ProgressTracker::new(60);
        p.add_minutes(30);
        assert_eq!(p.goal_fraction(), 0.5);
        p.add_minutes(90);
        assert_eq!(p.goal_fraction(), 1.0);
        assert_eq!(p.minutes_completed(), 120);
    }

    #[test]
    fn zero_goal_counts_as_met() {
        assert_eq!(ProgressTracker::new(0).goal_fraction(), 1.0);
    }

    #[test]
    fn reset_keeps_goal() {
        let mut p = ProgressTracker::new(45);
        p.on_progress_update(1);
        p.on_complete();
        p.reset();
        assert_eq!(p, ProgressTracker::new(45));
    }
}
