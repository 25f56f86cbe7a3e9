use std::time::Duration;

use chrono::{Datelike, Weekday};
use clap::Subcommand;
use fittrack_core::catalog::{self, DayPlan};
use fittrack_core::timer::{format_clock, Phase};
use fittrack_core::{Config, Event, IntervalScheduler, ProgressTracker, WorkoutHost, WorkoutObserver};
use tracing::{info, warn};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Show the workout planned for a day
    Plan {
        /// Weekday (mon, tuesday, ...); defaults to today
        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a workout in real time (Ctrl-C pauses and stops)
    Run {
        /// Weekday (mon, tuesday, ...); defaults to today
        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,
        /// Milliseconds per timer second, overrides timer.tick_interval_ms
        #[arg(long)]
        tick_ms: Option<u64>,
    },
}

fn parse_day(s: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("unknown weekday: {s}"))
}

fn today() -> Weekday {
    chrono::Local::now().weekday()
}

pub fn run(action: WorkoutAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        WorkoutAction::Plan { day, json } => {
            let plan = catalog::workout_for_day(day.unwrap_or_else(today));
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
        }
        WorkoutAction::Run { day, tick_ms } => {
            let config = Config::load()?;
            let plan = catalog::workout_for_day(day.unwrap_or_else(today));
            if plan.is_rest_day() {
                print_recovery(&plan);
                return Ok(());
            }

            let period = Duration::from_millis(
                tick_ms.unwrap_or(config.timer.tick_interval_ms).max(1),
            );
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(drive(plan, period, config.progress.daily_goal_minutes));
        }
    }
    Ok(())
}

fn print_plan(plan: &DayPlan) {
    println!("{} - {}", plan.day, plan.workout_type);
    if plan.is_rest_day() {
        println!("Today is for rest. Take a leisurely 20-30 minute walk and let your body recover.");
        return;
    }
    println!("40s WORK / 20s REST, {} exercises", plan.exercises.len());
    for (i, e) in plan.exercises.iter().enumerate() {
        println!("{:>2}. {:<18} {}", i + 1, e.name, e.target_area);
    }
}

fn print_recovery(plan: &DayPlan) {
    println!("{}: Active Recovery Day", plan.day);
    println!("Today is for rest. Take a leisurely 20-30 minute walk and let your body recover.");
}

/// Prints the session as it unfolds and forwards credit to the tracker.
struct ConsoleObserver {
    names: Vec<String>,
    progress: ProgressTracker,
}

impl WorkoutObserver for ConsoleObserver {
    fn on_complete(&mut self) {
        self.progress.on_complete();
    }

    fn on_progress_update(&mut self, minutes: u32) {
        self.progress.on_progress_update(minutes);
    }

    fn on_event(&mut self, event: &Event) {
        let total = self.names.len();
        let name = |i: usize| self.names.get(i).map(String::as_str).unwrap_or("");
        match event {
            Event::TimerStarted {
                exercise_index,
                phase,
                remaining_secs,
            } => println!(
                "[{}/{}] {} - {} {}s",
                exercise_index + 1,
                total,
                name(*exercise_index),
                phase.label(),
                remaining_secs
            ),
            Event::PhaseChanged {
                exercise_index,
                phase: Phase::Work,
                duration_secs,
            } => println!(
                "[{}/{}] {} - {} {}s",
                exercise_index + 1,
                total,
                name(*exercise_index),
                Phase::Work.label(),
                duration_secs
            ),
            Event::PhaseChanged {
                phase: Phase::Rest,
                duration_secs,
                ..
            } => println!("      {} {}s", Phase::Rest.label(), duration_secs),
            Event::MinuteCompleted { total_secs, .. } => println!(
                "      +1 min (session {})",
                format_clock(*total_secs)
            ),
            Event::WorkoutCompleted { .. } => println!("Workout complete! Amazing work."),
            Event::TimerPaused { remaining_secs } => {
                println!("Paused with {remaining_secs}s left in this phase.")
            }
            _ => {}
        }
    }
}

async fn drive(plan: DayPlan, period: Duration, goal_minutes: u32) {
    println!("{} - {}", plan.day, plan.workout_type);
    let observer = ConsoleObserver {
        names: plan.exercises.iter().map(|e| e.name.clone()).collect(),
        progress: ProgressTracker::new(goal_minutes),
    };
    let mut host = WorkoutHost::new(plan.exercises, IntervalScheduler::new(), observer)
        .with_tick_period(period);

    info!(period_ms = period.as_millis() as u64, "starting workout");
    host.start();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut signal_live = true;

    while !host.timer().is_complete() {
        let ticked = tokio::select! {
            _ = host.scheduler_mut().next_tick() => true,
            res = &mut ctrl_c, if signal_live => match res {
                Ok(()) => false,
                Err(e) => {
                    warn!(error = %e, "ctrl-c handler unavailable, running to completion");
                    signal_live = false;
                    continue;
                }
            },
        };
        if !ticked {
            host.pause();
            break;
        }
        host.tick();
    }

    let progress = &host.observer().progress;
    println!(
        "Session time {}, {} / {} min toward today's goal ({:.0}%)",
        host.timer().session_display(),
        progress.minutes_completed(),
        progress.goal_minutes(),
        progress.goal_fraction() * 100.0
    );
}
