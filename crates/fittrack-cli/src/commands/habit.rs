use chrono::NaiveDate;
use clap::Subcommand;
use fittrack_core::habit::{self, ChartMetric, ChartRange, HabitLog, HabitStats};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Check a session duration before logging it
    Check {
        /// Minutes, 1 - 1439
        #[arg(allow_hyphen_values = true)]
        minutes: String,
    },
    /// Summarise a set of logged sessions
    Stats {
        /// Session as DATE=MINUTES (e.g. 2026-03-01=20); repeatable
        #[arg(long = "log", value_parser = parse_log)]
        logs: Vec<HabitLog>,
        /// Chart window: week, month or year
        #[arg(long, default_value = "week", value_parser = parse_range)]
        range: ChartRange,
        /// Chart values: count or minutes
        #[arg(long, default_value = "count", value_parser = parse_metric)]
        metric: ChartMetric,
        /// Last day of the chart (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_log(s: &str) -> Result<HabitLog, String> {
    let (date, minutes) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DATE=MINUTES, got {s}"))?;
    let date = date
        .trim()
        .parse::<NaiveDate>()
        .map_err(|e| format!("bad date {date}: {e}"))?;
    let minutes = habit::parse_duration(minutes).map_err(|e| e.to_string())?;
    HabitLog::new(date, i64::from(minutes)).map_err(|e| e.to_string())
}

fn parse_range(s: &str) -> Result<ChartRange, String> {
    match s.to_ascii_lowercase().as_str() {
        "week" => Ok(ChartRange::Week),
        "month" => Ok(ChartRange::Month),
        "year" => Ok(ChartRange::Year),
        _ => Err(format!("unknown range: {s}")),
    }
}

fn parse_metric(s: &str) -> Result<ChartMetric, String> {
    match s.to_ascii_lowercase().as_str() {
        "count" => Ok(ChartMetric::Count),
        "minutes" => Ok(ChartMetric::Minutes),
        _ => Err(format!("unknown metric: {s}")),
    }
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::Check { minutes } => {
            let minutes = habit::parse_duration(&minutes)?;
            println!("ok: {minutes} minutes");
        }
        HabitAction::Stats {
            logs,
            range,
            metric,
            today,
            json,
        } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let stats = HabitStats::from_logs(&logs);
            let buckets = habit::chart(&logs, range, metric, today);
            if json {
                let out = serde_json::json!({ "stats": stats, "chart": buckets });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!(
                    "Sessions: {}  Total: {} min  Avg/day: {} min",
                    stats.total_count, stats.total_minutes, stats.avg_minutes_per_day
                );
                println!(
                    "Longest: {} min  Shortest: {} min  Most in a day: {}",
                    stats.longest_session, stats.shortest_session, stats.max_sessions_per_day
                );
                for bucket in &buckets {
                    println!("  {:>3}  {}", bucket.label, bucket.value);
                }
            }
        }
    }
    Ok(())
}
