//! Workout timer engine.
//!
//! The engine is a tick-driven state machine with no internal thread and no
//! clock of its own. Each command mutates the timer and returns the events it
//! produced; nothing is called back from inside a transition.
//!
//! ## State Transitions
//!
//! ```text
//! (i, Work, 40) --40 ticks--> (i, Rest, 20) --20 ticks--> (i+1, Work, 40)
//!                                           \--last i---> Completed
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = WorkoutTimer::new(exercises);
//! timer.start();
//! // Once per second:
//! for event in timer.tick() { host.dispatch(event) }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::phase::{format_clock, Phase, WORK_SECS};
use crate::catalog::Exercise;
use crate::events::Event;

const SECS_PER_MINUTE: u64 = 60;

/// Inputs accepted by [`WorkoutTimer::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Start,
    Pause,
    Toggle,
    Tick,
    Skip,
    Reset,
}

/// Interval timer over an ordered exercise list.
///
/// An empty exercise list yields a timer that is complete from the start:
/// every command is a no-op apart from `reset`, which restores the initial
/// fields and emits `TimerReset`, and no `WorkoutCompleted` is ever emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTimer {
    exercises: Vec<Exercise>,
    exercise_index: usize,
    phase: Phase,
    remaining_secs: u32,
    running: bool,
    total_secs: u64,
    completed: bool,
}

impl WorkoutTimer {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        let completed = exercises.is_empty();
        Self {
            exercises,
            exercise_index: 0,
            phase: Phase::Work,
            remaining_secs: WORK_SECS,
            running: false,
            total_secs: 0,
            completed,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.exercise_index)
    }

    fn is_last_exercise(&self) -> bool {
        self.exercise_index + 1 >= self.exercises.len()
    }

    /// `MM:SS` left in the current phase.
    pub fn remaining_display(&self) -> String {
        format_clock(self.remaining_secs as u64)
    }

    /// `MM:SS` of session time so far.
    pub fn session_display(&self) -> String {
        format_clock(self.total_secs)
    }

    /// 1.0 at the start of a phase, 0.0 when it runs out.
    pub fn ring_fraction(&self) -> f64 {
        self.remaining_secs as f64 / self.phase.duration_secs() as f64
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            exercise_index: self.exercise_index,
            exercise_count: self.exercises.len(),
            exercise_name: self
                .current_exercise()
                .map(|e| e.name.clone())
                .unwrap_or_default(),
            phase: self.phase,
            running: self.running,
            completed: self.completed,
            remaining_secs: self.remaining_secs,
            remaining_display: self.remaining_display(),
            session_display: self.session_display(),
            total_secs: self.total_secs,
            ring_fraction: self.ring_fraction(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn apply(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Toggle => self.toggle(),
            Command::Tick => self.tick(),
            Command::Skip => self.skip(),
            Command::Reset => self.reset(),
        }
    }

    pub fn start(&mut self) -> Vec<Event> {
        if self.completed || self.running {
            return Vec::new();
        }
        self.running = true;
        vec![Event::TimerStarted {
            exercise_index: self.exercise_index,
            phase: self.phase,
            remaining_secs: self.remaining_secs,
        }]
    }

    pub fn pause(&mut self) -> Vec<Event> {
        if !self.running {
            return Vec::new();
        }
        self.running = false;
        vec![Event::TimerPaused {
            remaining_secs: self.remaining_secs,
        }]
    }

    /// The play/pause control.
    pub fn toggle(&mut self) -> Vec<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Advance one second. Ignored unless running.
    ///
    /// A decrement that reaches zero resolves the pending transition in the
    /// same call, so a running timer never rests at zero between ticks.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.running || self.completed {
            return events;
        }

        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.total_secs += 1;
            if self.total_secs % SECS_PER_MINUTE == 0 {
                events.push(Event::MinuteCompleted {
                    minutes: 1,
                    total_secs: self.total_secs,
                });
            }
            if self.remaining_secs == 0 {
                self.transition(&mut events);
            }
        } else {
            self.transition(&mut events);
        }
        events
    }

    /// End the current phase now, whatever is left on the clock.
    ///
    /// Skip moves one phase at a time, including on the last exercise: a
    /// skip during its Work phase lands in that exercise's Rest, and only a
    /// second skip completes the workout. It never jumps from Work straight
    /// to the next exercise or to completion.
    pub fn skip(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.completed {
            return events;
        }
        debug!(
            exercise_index = self.exercise_index,
            phase = %self.phase,
            remaining_secs = self.remaining_secs,
            "skipping phase"
        );
        self.transition(&mut events);
        events
    }

    pub fn reset(&mut self) -> Vec<Event> {
        self.exercise_index = 0;
        self.phase = Phase::Work;
        self.remaining_secs = WORK_SECS;
        self.running = false;
        self.total_secs = 0;
        self.completed = self.exercises.is_empty();
        info!("workout timer reset");
        vec![Event::TimerReset]
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn transition(&mut self, events: &mut Vec<Event>) {
        match self.phase {
            Phase::Work => self.enter(self.exercise_index, Phase::Rest, events),
            Phase::Rest if !self.is_last_exercise() => {
                self.enter(self.exercise_index + 1, Phase::Work, events)
            }
            Phase::Rest => {
                self.running = false;
                self.completed = true;
                info!(
                    exercises = self.exercises.len(),
                    total_secs = self.total_secs,
                    "workout completed"
                );
                events.push(Event::WorkoutCompleted {
                    exercise_count: self.exercises.len(),
                    total_secs: self.total_secs,
                });
            }
        }
    }

    fn enter(&mut self, exercise_index: usize, phase: Phase, events: &mut Vec<Event>) {
        self.exercise_index = exercise_index;
        self.phase = phase;
        self.remaining_secs = phase.duration_secs();
        debug!(exercise_index, phase = %phase, "phase changed");
        events.push(Event::PhaseChanged {
            exercise_index,
            phase,
            duration_secs: self.remaining_secs,
        });
    }
}
