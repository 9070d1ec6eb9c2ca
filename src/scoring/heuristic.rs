use tracing::debug;

use crate::features::{extract_text_features, Metadata};
use crate::lexicon::Lexicon;
use crate::scoring::composite::{ScoreBreakdown, SAFETY_WEIGHT};
use crate::scoring::quality::{content_quality, engagement_potential};
use crate::scoring::reputation::{ReputationConfig, ReputationScorer};
use crate::scoring::signals::{guarded, safety_score, toxicity_score, DEFAULT_TOXICITY_SCORE};
use crate::scoring::strategy::{ScoredPost, ScoringContext, ViralityScorer};
use crate::scoring::timing::{TimingConfig, TimingScorer};
use crate::suggestions::build_suggestions;
use crate::AlgorithmScore;

pub const HEURISTIC_VERSION: &str = "enhanced-ai-v2.0";

/// Keyword, length and punctuation heuristics over a configurable lexicon.
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    lexicon: Lexicon,
    timing: TimingScorer,
    reputation: ReputationScorer,
}

impl HeuristicScorer {
    pub fn new(lexicon: Lexicon, timing: TimingConfig, reputation: &ReputationConfig) -> Self {
        Self {
            lexicon,
            timing: TimingScorer::new(timing),
            reputation: ReputationScorer::new(reputation),
        }
    }
}

impl ViralityScorer for HeuristicScorer {
    fn version(&self) -> &'static str {
        HEURISTIC_VERSION
    }

    fn score(&self, text: &str, metadata: &Metadata, ctx: &mut ScoringContext) -> ScoredPost {
        let features = extract_text_features(text, metadata, ctx.timestamp_ms());

        let content_quality = content_quality(&features, &self.lexicon);
        let engagement = engagement_potential(&features, &self.lexicon);
        let timing = self.timing.score(ctx.hour());
        let user_reputation = self.reputation.score(text, &self.lexicon, ctx.rng());

        let toxicity = guarded(
            "toxicity",
            toxicity_score(text, &self.lexicon),
            DEFAULT_TOXICITY_SCORE,
        );
        let safety = safety_score(toxicity);

        let breakdown = ScoreBreakdown {
            content_quality,
            social_signals: engagement,
            timing,
            user_reputation,
            safety_score: safety * SAFETY_WEIGHT,
        };
        let virality_score = breakdown.virality_score();
        debug!(?breakdown, virality_score, "heuristic score");

        let suggestions = build_suggestions(&breakdown, &features);

        ScoredPost {
            score: AlgorithmScore {
                light_ranker_score: content_quality,
                heavy_ranker_score: None,
                toxicity_score: toxicity,
                engagement_score: engagement,
                virality_score,
                features,
                breakdown,
            },
            suggestions,
        }
    }
}
