use crate::features::TextFeatures;
use crate::scoring::ScoreBreakdown;
use crate::{Priority, Suggestion, SuggestionKind};

const PEAK_HOURS_HINT: &str =
    "Consider posting during peak hours (9-10 AM, 12-1 PM, 5-6 PM, 7-9 PM)";

/// Rule-based hints for the heuristic scorer. Rules run in a fixed order and
/// each fires independently.
pub fn build_suggestions(breakdown: &ScoreBreakdown, features: &TextFeatures) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if breakdown.content_quality < 0.6 {
        if features.length < 100 {
            suggestions.push(Suggestion::new(
                SuggestionKind::Content,
                Priority::High,
                "Expand your tweet to 100-200 characters for better engagement",
                20,
            ));
        } else {
            suggestions.push(Suggestion::new(
                SuggestionKind::Content,
                Priority::High,
                "Add trending keywords or emotional language to boost content quality",
                15,
            ));
        }
    }

    if breakdown.social_signals < 0.5 {
        if features.question_mark_count == 0 {
            suggestions.push(Suggestion::new(
                SuggestionKind::Engagement,
                Priority::High,
                "Add a question to encourage replies and increase engagement",
                25,
            ));
        } else {
            suggestions.push(Suggestion::new(
                SuggestionKind::Engagement,
                Priority::Medium,
                "Use more call-to-action words like \"think\", \"opinion\", or \"share\"",
                15,
            ));
        }
    }

    if breakdown.timing < 0.7 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Timing,
            Priority::Medium,
            PEAK_HOURS_HINT,
            10,
        ));
    }

    if features.hashtag_count == 0 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Discoverability,
            Priority::Medium,
            "Add 1-3 relevant hashtags to increase discoverability",
            12,
        ));
    } else if features.hashtag_count > 3 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Discoverability,
            Priority::Low,
            "Reduce hashtags to 1-3 for better performance",
            8,
        ));
    }

    suggestions
}

/// Hints for the baseline scorer, which also flags unsafe language.
pub fn build_baseline_suggestions(breakdown: &ScoreBreakdown, toxicity: f64) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if breakdown.content_quality < 0.6 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Content,
            Priority::High,
            "Improve content quality by adding more engaging language or expanding the tweet",
            15,
        ));
    }
    if breakdown.social_signals < 0.5 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Engagement,
            Priority::High,
            "Add a question or call-to-action to encourage replies and engagement",
            20,
        ));
    }
    if breakdown.timing < 0.7 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Timing,
            Priority::Medium,
            PEAK_HOURS_HINT,
            10,
        ));
    }
    if toxicity > 0.3 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Safety,
            Priority::High,
            "Reduce potentially offensive language to improve content safety score",
            25,
        ));
    }

    suggestions
}
