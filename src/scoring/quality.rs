use tracing::debug;

use crate::features::TextFeatures;
use crate::lexicon::Lexicon;
use crate::scoring::signals::{
    clamp01, cta_score, emotional_score, guarded, trending_score, DEFAULT_ENGAGEMENT_SCORE,
    DEFAULT_LIGHT_RANKER_SCORE,
};

pub fn content_quality(features: &TextFeatures, lexicon: &Lexicon) -> f64 {
    let raw = content_quality_raw(features, lexicon);
    clamp01(guarded("content_quality", raw, DEFAULT_LIGHT_RANKER_SCORE))
}

pub fn engagement_potential(features: &TextFeatures, lexicon: &Lexicon) -> f64 {
    let raw = engagement_potential_raw(features, lexicon);
    clamp01(guarded("engagement_potential", raw, DEFAULT_ENGAGEMENT_SCORE))
}

/// Raw content quality before the final clamp; callers guard and clamp it.
pub fn content_quality_raw(features: &TextFeatures, lexicon: &Lexicon) -> f64 {
    let mut score = 0.3;

    if (100..=200).contains(&features.length) {
        score += 0.3;
    } else if (50..=280).contains(&features.length) {
        score += 0.2;
    } else if features.length < 50 {
        score -= 0.1;
    }

    let trending = trending_score(&features.text, lexicon);
    let emotional = emotional_score(&features.text, lexicon);
    let cta = cta_score(&features.text, lexicon);
    score += trending * 0.2;
    score += emotional * 0.15;
    score += cta * 0.1;

    if features.question_mark_count > 0 {
        score += 0.1;
    }

    if (1..=2).contains(&features.exclamation_count) {
        score += 0.05;
    } else if features.exclamation_count > 3 {
        score -= 0.05;
    }

    debug!(trending, emotional, cta, score, "content quality");
    score
}

pub fn engagement_potential_raw(features: &TextFeatures, lexicon: &Lexicon) -> f64 {
    let mut score = 0.2;

    if features.question_mark_count > 0 {
        score += 0.25;
    }

    score += cta_score(&features.text, lexicon) * 0.2;
    score += emotional_score(&features.text, lexicon) * 0.15;

    if (1..=3).contains(&features.hashtag_count) {
        score += 0.1;
    } else if features.hashtag_count > 5 {
        score -= 0.1;
    }

    if (1..=2).contains(&features.mention_count) {
        score += 0.05;
    } else if features.mention_count > 3 {
        score -= 0.05;
    }

    if features.has_url {
        score += 0.05;
    }

    debug!(score, "engagement potential");
    score
}
