//! Habit-log duration rules and the statistics derived from a log history.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest loggable session, in minutes.
pub const MIN_LOG_MINUTES: u32 = 1;
/// Longest loggable session: one minute short of a full day.
pub const MAX_LOG_MINUTES: u32 = 1439;

/// Check a user-entered duration.
pub fn validate_duration(minutes: i64) -> Result<u32, ValidationError> {
    if (MIN_LOG_MINUTES as i64..=MAX_LOG_MINUTES as i64).contains(&minutes) {
        Ok(minutes as u32)
    } else {
        Err(ValidationError::OutOfRange {
            field: "duration".into(),
            value: minutes,
            min: MIN_LOG_MINUTES as i64,
            max: MAX_LOG_MINUTES as i64,
        })
    }
}

/// Parse and check a duration typed into a text field.
pub fn parse_duration(input: &str) -> Result<u32, ValidationError> {
    let minutes = input
        .trim()
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidValue {
            field: "duration".into(),
            message: e.to_string(),
        })?;
    validate_duration(minutes)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLog {
    pub date: NaiveDate,
    pub duration_min: u32,
}

impl HabitLog {
    pub fn new(date: NaiveDate, minutes: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            date,
            duration_min: validate_duration(minutes)?,
        })
    }
}

/// Summary figures over a whole log history. Every field is 0 for an empty
/// history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStats {
    pub total_count: usize,
    pub total_minutes: u64,
    /// Total minutes over the number of distinct days logged, rounded half up.
    pub avg_minutes_per_day: u64,
    pub longest_session: u32,
    pub shortest_session: u32,
    /// Most sessions logged on a single day.
    pub max_sessions_per_day: usize,
}

impl HabitStats {
    pub fn from_logs(logs: &[HabitLog]) -> Self {
        if logs.is_empty() {
            return Self::default();
        }

        let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
        for log in logs {
            *per_day.entry(log.date).or_default() += 1;
        }

        let total_minutes: u64 = logs.iter().map(|l| u64::from(l.duration_min)).sum();
        let days = per_day.len() as u64;

        Self {
            total_count: logs.len(),
            total_minutes,
            avg_minutes_per_day: (2 * total_minutes + days) / (2 * days),
            longest_session: logs.iter().map(|l| l.duration_min).max().unwrap_or(0),
            shortest_session: logs.iter().map(|l| l.duration_min).min().unwrap_or(0),
            max_sessions_per_day: per_day.values().copied().max().unwrap_or(0),
        }
    }
}

/// Time window a history chart covers, ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartRange {
    /// Seven single days.
    Week,
    /// Four consecutive seven-day windows.
    Month,
    /// Six calendar months.
    Year,
}

/// What a chart bucket adds up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    Count,
    Minutes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBucket {
    pub label: String,
    pub value: u64,
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Bucket `logs` for a history chart. Buckets run oldest first and the last
/// one always contains `today`. Logs outside every bucket are ignored.
pub fn chart(
    logs: &[HabitLog],
    range: ChartRange,
    metric: ChartMetric,
    today: NaiveDate,
) -> Vec<ChartBucket> {
    let value_of = |keep: &dyn Fn(NaiveDate) -> bool| -> u64 {
        let matching = logs.iter().filter(|l| keep(l.date));
        match metric {
            ChartMetric::Count => matching.count() as u64,
            ChartMetric::Minutes => matching.map(|l| u64::from(l.duration_min)).sum(),
        }
    };

    match range {
        ChartRange::Week => (0..7)
            .rev()
            .map(|back| {
                let day = today - Duration::days(back);
                ChartBucket {
                    label: day.weekday().to_string(),
                    value: value_of(&|d: NaiveDate| d == day),
                }
            })
            .collect(),
        ChartRange::Month => (0..4)
            .map(|i| {
                let end = today - Duration::days((3 - i) * 7);
                let start = end - Duration::days(6);
                ChartBucket {
                    label: format!("W{}", i + 1),
                    value: value_of(&|d: NaiveDate| (start..=end).contains(&d)),
                }
            })
            .collect(),
        ChartRange::Year => {
            let current = today.year() * 12 + today.month0() as i32;
            (0..6)
                .rev()
                .map(|back| {
                    let slot = current - back;
                    let (year, month0) = (slot.div_euclid(12), slot.rem_euclid(12) as u32);
                    ChartBucket {
                        label: MONTH_LABELS[month0 as usize].to_string(),
                        value: value_of(&|d: NaiveDate| d.year() == year && d.month0() == month0),
                    }
                })
                .collect()
        }
    }
}
