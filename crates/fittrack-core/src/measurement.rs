//! Body measurements and weight progress toward a target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One weigh-in. Weight in kilograms, circumferences in centimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub date: NaiveDate,
    pub weight: f64,
    pub waist: f64,
    pub thigh: f64,
}

impl Measurement {
    /// Every value must be a finite, positive number.
    pub fn new(date: NaiveDate, weight: f64, waist: f64, thigh: f64) -> Result<Self, ValidationError> {
        for (field, value) in [("weight", weight), ("waist", waist), ("thigh", thigh)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field.into(),
                    message: format!("expected a positive number, got {value}"),
                });
            }
        }
        Ok(Self {
            date,
            weight,
            waist,
            thigh,
        })
    }
}

/// Direction of a change, read against whether lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improved,
    Worsened,
    Unchanged,
}

impl Trend {
    pub fn of(change: f64, lower_is_better: bool) -> Self {
        if change == 0.0 || change.is_nan() {
            Trend::Unchanged
        } else if (change < 0.0) == lower_is_better {
            Trend::Improved
        } else {
            Trend::Worsened
        }
    }
}

/// Change in each value from one measurement to the next (`current - previous`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDelta {
    pub weight: f64,
    pub waist: f64,
    pub thigh: f64,
}

impl MeasurementDelta {
    pub fn between(previous: &Measurement, current: &Measurement) -> Self {
        Self {
            weight: current.weight - previous.weight,
            waist: current.waist - previous.waist,
            thigh: current.thigh - previous.thigh,
        }
    }

    /// Delta of the latest entry against the one before it. All zero when
    /// there are fewer than two entries.
    pub fn latest(history: &[Measurement]) -> Self {
        match history {
            [.., previous, current] => Self::between(previous, current),
            _ => Self::default(),
        }
    }
}

/// Weight progress over a history ordered oldest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    pub start_weight: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    /// `start - current`; negative after a gain.
    pub weight_lost: f64,
    /// Share of the way from start to target, clamped to `0.0..=1.0`.
    pub goal_fraction: f64,
}

impl WeightProgress {
    pub fn from_history(history: &[Measurement], target_weight: f64) -> Self {
        let (Some(first), Some(last)) = (history.first(), history.last()) else {
            return Self {
                target_weight,
                ..Self::default()
            };
        };
        Self {
            start_weight: first.weight,
            current_weight: last.weight,
            target_weight,
            weight_lost: first.weight - last.weight,
            goal_fraction: goal_fraction(first.weight, last.weight, target_weight),
        }
    }

    /// Whole-number percentage for display.
    pub fn goal_percent(&self) -> u32 {
        (self.goal_fraction * 100.0).round() as u32
    }
}

/// `(start - current) / (start - target)`, clamped to `0.0..=1.0`. A start
/// already at the target counts as done; a result that is not a number
/// counts as no progress.
pub fn goal_fraction(start: f64, current: f64, target: f64) -> f64 {
    if start == target {
        return 1.0;
    }
    let fraction = (start - current) / (start - target);
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, weight: f64, waist: f64, thigh: f64) -> Measurement {
        Measurement::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), weight, waist, thigh).unwrap()
    }

    fn history() -> Vec<Measurement> {
        vec![
            entry(1, 90.0, 95.0, 62.0),
            entry(8, 89.2, 94.0, 61.5),
            entry(15, 88.5, 93.0, 61.0),
            entry(22, 87.8, 92.0, 60.5),
        ]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rejects_non_positive_values() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            Measurement::new(day, 0.0, 90.0, 60.0),
            Err(ValidationError::InvalidValue { field, .. }) if field == "weight"
        ));
        assert!(Measurement::new(day, 80.0, f64::NAN, 60.0).is_err());
        assert!(Measurement::new(day, 80.0, 90.0, -1.0).is_err());
    }

    #[test]
    fn progress_over_history() {
        let progress = WeightProgress::from_history(&history(), 80.0);
        assert!(close(progress.start_weight, 90.0));
        assert!(close(progress.current_weight, 87.8));
        assert!(close(progress.weight_lost, 2.2));
        assert!(close(progress.goal_fraction, 0.22));
        assert_eq!(progress.goal_percent(), 22);
    }

    #[test]
    fn empty_history_has_no_progress() {
        let progress = WeightProgress::from_history(&[], 80.0);
        assert_eq!(progress.weight_lost, 0.0);
        assert_eq!(progress.goal_fraction, 0.0);
        assert_eq!(progress.goal_percent(), 0);
        assert_eq!(MeasurementDelta::latest(&[]), MeasurementDelta::default());
    }

    #[test]
    fn goal_fraction_is_clamped() {
        // gained weight
        assert_eq!(goal_fraction(90.0, 92.0, 80.0), 0.0);
        // went past the target
        assert_eq!(goal_fraction(90.0, 78.0, 80.0), 1.0);
        assert_eq!(goal_fraction(80.0, 85.0, 80.0), 1.0);
        assert_eq!(goal_fraction(f64::NAN, 85.0, 80.0), 0.0);
    }

    #[test]
    fn latest_delta_compares_last_two_entries() {
        let delta = MeasurementDelta::latest(&history());
        assert!(close(delta.weight, -0.7));
        assert!(close(delta.waist, -1.0));
        assert!(close(delta.thigh, -0.5));
        assert_eq!(MeasurementDelta::latest(&history()[..1]), MeasurementDelta::default());
    }

    #[test]
    fn trend_reads_direction() {
        assert_eq!(Trend::of(-0.7, true), Trend::Improved);
        assert_eq!(Trend::of(0.4, true), Trend::Worsened);
        assert_eq!(Trend::of(0.4, false), Trend::Improved);
        assert_eq!(Trend::of(0.0, true), Trend::Unchanged);
    }
}
