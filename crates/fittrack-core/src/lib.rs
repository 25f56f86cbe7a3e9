//! # FitTrack Core Library
//!
//! Core logic for the FitTrack interval workout app. The CLI binary and any
//! future GUI are thin hosts over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven work/rest state machine. It owns no clock;
//!   commands return the events they produced.
//! - **Scheduler**: tick sources the host arms while the timer runs
//! - **Host**: wires a timer to a tick source and dispatches events to an
//!   observer after each state change commits
//! - **Catalog**: built-in exercises and the weekday rotation
//! - **Habit / Measurement**: log validation and the statistics shown on
//!   history and progress views
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`WorkoutTimer`]: Core timer state machine
//! - [`WorkoutHost`]: Timer + tick source + observer
//! - [`ProgressTracker`]: Daily minute accumulator
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod error;
pub mod events;
pub mod habit;
pub mod host;
pub mod measurement;
pub mod progress;
pub mod scheduler;
pub mod storage;
pub mod timer;

pub use catalog::{workout_for_day, Category, DayPlan, Exercise, ExerciseMode};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use habit::{ChartBucket, ChartMetric, ChartRange, HabitLog, HabitStats};
pub use host::{WorkoutHost, WorkoutObserver};
pub use measurement::{Measurement, MeasurementDelta, Trend, WeightProgress};
pub use progress::ProgressTracker;
pub use scheduler::{IntervalScheduler, ManualScheduler, TickScheduler};
pub use storage::Config;
pub use timer::{Command, Phase, WorkoutTimer};
