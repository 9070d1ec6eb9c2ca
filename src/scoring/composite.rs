use serde::{Deserialize, Serialize};

pub const SAFETY_WEIGHT: f64 = 0.2;

/// Named decomposition of the composite score. Field order is the JSON
/// output order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub content_quality: f64,
    pub social_signals: f64,
    pub timing: f64,
    pub user_reputation: f64,
    pub safety_score: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.content_quality
            + self.social_signals
            + self.timing
            + self.user_reputation
            + self.safety_score
    }

    /// `floor(100 * total)`. There is no upper clamp, so a strong breakdown
    /// lands well above 100.
    pub fn virality_score(&self) -> i64 {
        let scaled = (self.total() * 100.0).floor();
        if scaled.is_finite() {
            scaled as i64
        } else {
            0
        }
    }
}
