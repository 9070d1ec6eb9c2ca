pub mod analyzer;
pub mod config;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod logging;
pub mod scoring;
pub mod suggestions;

use serde::{Deserialize, Serialize};

use crate::features::TextFeatures;
use crate::scoring::ScoreBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Heuristic,
    Baseline,
}

impl StrategyKind {
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Baseline => "baseline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Content,
    Engagement,
    Timing,
    Discoverability,
    Safety,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub suggestion: String,
    pub expected_improvement: u32,
}

impl Suggestion {
    pub fn new(
        kind: SuggestionKind,
        priority: Priority,
        suggestion: impl Into<String>,
        expected_improvement: u32,
    ) -> Self {
        Self {
            kind,
            priority,
            suggestion: suggestion.into(),
            expected_improvement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmScore {
    pub light_ranker_score: f64,
    /// Always `None`; no heavy ranker exists.
    pub heavy_ranker_score: Option<f64>,
    pub toxicity_score: f64,
    pub engagement_score: f64,
    pub virality_score: i64,
    pub features: TextFeatures,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub score: AlgorithmScore,
    pub suggestions: Vec<Suggestion>,
    pub algorithm_version: String,
    pub processing_time: u64,
}

pub fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
