use tracing::debug;

use crate::features::{extract_text_features, Metadata, TextFeatures};
use crate::lexicon::{Lexicon, ToxicWordList};
use crate::scoring::composite::{ScoreBreakdown, SAFETY_WEIGHT};
use crate::scoring::signals::{
    clamp01, guarded, toxicity_score, DEFAULT_ENGAGEMENT_SCORE, DEFAULT_LIGHT_RANKER_SCORE,
    DEFAULT_TOXICITY_SCORE,
};
use crate::scoring::strategy::{ScoredPost, ScoringContext, ViralityScorer};
use crate::scoring::timing::{TimingConfig, TimingCurve, TimingScorer};
use crate::suggestions::build_baseline_suggestions;
use crate::AlgorithmScore;

pub const BASELINE_VERSION: &str = "twitter-algorithm-v1.0";

const CONTENT_WEIGHT: f64 = 0.4;
const SOCIAL_WEIGHT: f64 = 0.3;
const DEFAULT_USER_REPUTATION: f64 = 0.7;

const CTA_WORDS: &[&str] = &[
    "what", "think", "opinion", "agree", "disagree", "thoughts", "share",
];
const EMOTIONAL_WORDS: &[&str] = &["amazing", "incredible", "shocking", "unbelievable", "wow"];

/// Fallback scorer with built-in tables only. It needs no external
/// resources, so constructing it cannot fail.
#[derive(Debug, Clone)]
pub struct BaselineScorer {
    toxic_lexicon: Lexicon,
    timing: TimingScorer,
}

impl Default for BaselineScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineScorer {
    pub fn new() -> Self {
        Self {
            toxic_lexicon: Lexicon::builtin(ToxicWordList::Extended),
            timing: TimingScorer::new(TimingConfig {
                curve: TimingCurve::PeakHours,
            }),
        }
    }

    pub fn light_ranker_score(&self, features: &TextFeatures) -> f64 {
        let mut score = 0.5;

        if (50..=200).contains(&features.length) {
            score += 0.1;
        }
        if features.question_mark_count > 0 {
            score += 0.05;
        }
        if (1..=2).contains(&features.exclamation_count) {
            score += 0.03;
        }

        if (1..=3).contains(&features.hashtag_count) {
            score += 0.08;
        }
        if (1..=2).contains(&features.mention_count) {
            score += 0.05;
        }

        if features.has_url {
            score += 0.02;
        }
        if features.has_media {
            score += 0.05;
        }
        if features.is_retweet {
            score -= 0.1;
        }

        if features.hashtag_count > 5 {
            score -= 0.1;
        }
        if features.mention_count > 3 {
            score -= 0.05;
        }
        if features.exclamation_count > 3 {
            score -= 0.05;
        }

        clamp01(guarded("light_ranker", score, DEFAULT_LIGHT_RANKER_SCORE))
    }

    pub fn toxicity_score(&self, text: &str) -> f64 {
        let score = toxicity_score(text, &self.toxic_lexicon).min(1.0);
        guarded("toxicity", score, DEFAULT_TOXICITY_SCORE)
    }

    pub fn engagement_score(&self, features: &TextFeatures) -> f64 {
        let lower = features.text.to_lowercase();
        let mut score = 0.3;

        if features.question_mark_count > 0 {
            score += 0.2;
        }

        let cta_hits = count_present(&lower, CTA_WORDS);
        score += cta_hits as f64 * 0.05;

        let emotional_hits = count_present(&lower, EMOTIONAL_WORDS);
        score += emotional_hits as f64 * 0.03;

        if (100..=200).contains(&features.length) {
            score += 0.1;
        }

        clamp01(guarded("engagement", score, DEFAULT_ENGAGEMENT_SCORE))
    }
}

impl ViralityScorer for BaselineScorer {
    fn version(&self) -> &'static str {
        BASELINE_VERSION
    }

    fn score(&self, text: &str, metadata: &Metadata, ctx: &mut ScoringContext) -> ScoredPost {
        let features = extract_text_features(text, metadata, ctx.timestamp_ms());

        let light_ranker = self.light_ranker_score(&features);
        let toxicity = self.toxicity_score(text);
        let engagement = self.engagement_score(&features);

        let breakdown = ScoreBreakdown {
            content_quality: light_ranker * CONTENT_WEIGHT,
            social_signals: engagement * SOCIAL_WEIGHT,
            timing: self.timing.score(ctx.hour()),
            user_reputation: DEFAULT_USER_REPUTATION,
            safety_score: (1.0 - toxicity) * SAFETY_WEIGHT,
        };
        let virality_score = breakdown.virality_score();
        debug!(?breakdown, virality_score, "baseline score");

        let suggestions = build_baseline_suggestions(&breakdown, toxicity);

        ScoredPost {
            score: AlgorithmScore {
                light_ranker_score: light_ranker,
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

fn count_present(lower: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| lower.contains(*word)).count()
}
