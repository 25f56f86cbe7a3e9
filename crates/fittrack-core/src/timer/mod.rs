mod engine;
mod phase;

pub use engine::{Command, WorkoutTimer};
pub use phase::{format_clock, Phase, REST_SECS, WORK_SECS};
