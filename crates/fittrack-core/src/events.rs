use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every state change of the workout timer produces an Event.
///
/// Events are returned from the command that caused them; the host
/// dispatches them only after the timer state has been committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        exercise_index: usize,
        phase: Phase,
        remaining_secs: u32,
    },
    TimerPaused {
        remaining_secs: u32,
    },
    /// Work -> Rest on the same exercise, or Rest -> Work on the next one.
    PhaseChanged {
        exercise_index: usize,
        phase: Phase,
        duration_secs: u32,
    },
    /// Another full minute of session time has elapsed.
    MinuteCompleted {
        minutes: u32,
        total_secs: u64,
    },
    WorkoutCompleted {
        exercise_count: usize,
        total_secs: u64,
    },
    TimerReset,
    StateSnapshot {
        exercise_index: usize,
        exercise_count: usize,
        exercise_name: String,
        phase: Phase,
        running: bool,
        completed: bool,
        remaining_secs: u32,
        remaining_display: String,
        session_display: String,
        total_secs: u64,
        ring_fraction: f64,
    },
}
