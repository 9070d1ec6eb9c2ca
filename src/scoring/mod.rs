pub mod baseline;
pub mod composite;
pub mod heuristic;
pub mod quality;
pub mod reputation;
pub mod signals;
pub mod strategy;
pub mod timing;

pub use baseline::{BaselineScorer, BASELINE_VERSION};
pub use composite::ScoreBreakdown;
pub use heuristic::{HeuristicScorer, HEURISTIC_VERSION};
pub use reputation::{ReputationConfig, ReputationScorer};
pub use strategy::{ScoredPost, ScoringContext, ViralityScorer};
pub use timing::{TimingConfig, TimingCurve, TimingScorer};
