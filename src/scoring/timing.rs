use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingCurve {
    /// Separate steps for the morning, lunch, evening and night peaks.
    #[default]
    Graded,
    /// One flat value for every peak hour.
    PeakHours,
}

impl TimingCurve {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "graded" | "dynamic" => Some(TimingCurve::Graded),
            "peak_hours" | "peak-hours" | "peak" => Some(TimingCurve::PeakHours),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub curve: TimingCurve,
}

#[derive(Debug, Clone)]
pub struct TimingScorer {
    config: TimingConfig,
}

impl TimingScorer {
    pub fn new(config: TimingConfig) -> Self {
        Self { config }
    }

    /// `hour` is the local hour of day, 0-23.
    pub fn score(&self, hour: u32) -> f64 {
        match self.config.curve {
            TimingCurve::Graded => graded_score(hour),
            TimingCurve::PeakHours => peak_hours_score(hour),
        }
    }
}

fn graded_score(hour: u32) -> f64 {
    match hour {
        9..=10 => 0.9,
        12..=13 => 0.85,
        17..=18 => 0.8,
        19..=21 => 0.75,
        8..=22 => 0.6,
        _ => 0.3,
    }
}

fn peak_hours_score(hour: u32) -> f64 {
    const PEAK_HOURS: [u32; 9] = [9, 10, 12, 13, 17, 18, 19, 20, 21];

    if PEAK_HOURS.contains(&hour) {
        0.9
    } else if (8..=22).contains(&hour) {
        0.7
    } else {
        0.4
    }
}
