use serde::{Deserialize, Serialize};

/// Seconds of effort per exercise.
pub const WORK_SECS: u32 = 40;
/// Seconds of recovery after each exercise.
pub const REST_SECS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Rest,
}

impl Phase {
    pub fn duration_secs(self) -> u32 {
        match self {
            Phase::Work => WORK_SECS,
            Phase::Rest => REST_SECS,
        }
    }

    /// Badge text shown above the countdown.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "BURN PHASE",
            Phase::Rest => "REST PHASE",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Work => f.write_str("work"),
            Phase::Rest => f.write_str("rest"),
        }
    }
}

/// Render seconds as zero-padded `MM:SS`. Minutes are not wrapped at 60.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(Phase::Work.duration_secs(), 40);
        assert_eq!(Phase::Rest.duration_secs(), 20);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(40), "00:40");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(6000), "100:00");
    }
}
