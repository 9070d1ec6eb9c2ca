use chrono::{DateTime, FixedOffset, Local, Timelike};
use rand::{rngs::StdRng, SeedableRng};

use crate::features::Metadata;
use crate::{AlgorithmScore, Suggestion};

/// Per-call inputs that are not part of the text: capture time, the hour
/// used for timing, and the random source for simulated reputation.
pub struct ScoringContext {
    captured_at: DateTime<FixedOffset>,
    hour: u32,
    rng: StdRng,
}

impl ScoringContext {
    pub fn new(captured_at: DateTime<FixedOffset>, seed: u64) -> Self {
        Self::with_rng(captured_at, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(captured_at: DateTime<FixedOffset>) -> Self {
        Self::with_rng(captured_at, StdRng::from_entropy())
    }

    /// Context captured from the local wall clock.
    pub fn now(seed: Option<u64>) -> Self {
        let captured_at: DateTime<FixedOffset> = Local::now().into();
        match seed {
            Some(seed) => Self::new(captured_at, seed),
            None => Self::from_entropy(captured_at),
        }
    }

    fn with_rng(captured_at: DateTime<FixedOffset>, rng: StdRng) -> Self {
        Self {
            hour: captured_at.hour(),
            captured_at,
            rng,
        }
    }

    /// Scores timing as if posted at `hour` instead of the capture hour.
    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.captured_at.timestamp_millis()
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[derive(Debug, Clone)]
pub struct ScoredPost {
    pub score: AlgorithmScore,
    pub suggestions: Vec<Suggestion>,
}

pub trait ViralityScorer: Send + Sync {
    fn version(&self) -> &'static str;

    fn score(&self, text: &str, metadata: &Metadata, ctx: &mut ScoringContext) -> ScoredPost;
}
