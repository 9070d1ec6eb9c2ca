use tracing::warn;

use crate::lexicon::Lexicon;

pub const TOXIC_WORD_PENALTY: f64 = 0.2;

pub const DEFAULT_LIGHT_RANKER_SCORE: f64 = 0.5;
pub const DEFAULT_TOXICITY_SCORE: f64 = 0.1;
pub const DEFAULT_ENGAGEMENT_SCORE: f64 = 0.3;

/// Highest weight among trending topics found anywhere in the text.
/// Plain substring containment: "ai" matches inside "said".
pub fn trending_score(text: &str, lexicon: &Lexicon) -> f64 {
    let lower = text.to_lowercase();
    lexicon
        .trending_topics
        .iter()
        .filter(|(topic, _)| lower.contains(topic.as_str()))
        .map(|(_, weight)| *weight)
        .fold(0.0, f64::max)
}

pub fn emotional_score(text: &str, lexicon: &Lexicon) -> f64 {
    weighted_sum(text, lexicon.emotional_words.iter()).min(1.0)
}

pub fn cta_score(text: &str, lexicon: &Lexicon) -> f64 {
    weighted_sum(text, lexicon.cta_words.iter()).min(1.0)
}

pub fn has_professional_language(text: &str, lexicon: &Lexicon) -> bool {
    let lower = text.to_lowercase();
    lexicon
        .professional_words
        .iter()
        .any(|word| lower.contains(word.as_str()))
}

/// 0.2 per distinct toxic word present. Not clamped; bounded by list size.
pub fn toxicity_score(text: &str, lexicon: &Lexicon) -> f64 {
    let lower = text.to_lowercase();
    let hits = lexicon
        .toxic_words
        .iter()
        .filter(|word| lower.contains(word.as_str()))
        .count();
    hits as f64 * TOXIC_WORD_PENALTY
}

pub fn safety_score(toxicity: f64) -> f64 {
    (1.0 - toxicity).max(0.0)
}

/// Keeps one broken heuristic from failing the whole request: a non-finite
/// value is logged and replaced by `fallback`.
pub fn guarded(label: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(sub_score = label, value, fallback, "sub-score failed, using default");
        fallback
    }
}

pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(1.0)
}

fn weighted_sum<'a>(text: &str, table: impl Iterator<Item = (&'a String, &'a f64)>) -> f64 {
    let lower = text.to_lowercase();
    table
        .filter(|(word, _)| lower.contains(word.as_str()))
        .map(|(_, weight)| *weight)
        .sum()
}
