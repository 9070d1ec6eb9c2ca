use chrono::{FixedOffset, TimeZone};
use std::path::PathBuf;
use virality_score::analyzer::Analyzer;
use virality_score::config::ScoringConfig;
use virality_score::error::AnalysisError;
use virality_score::features::Metadata;
use virality_score::lexicon::ToxicWordList;
use virality_score::scoring::{ScoringContext, BASELINE_VERSION, HEURISTIC_VERSION};
use virality_score::StrategyKind;

fn context(hour: u32, seed: u64) -> ScoringContext {
    let captured_at = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 5, 6, hour, 0, 0)
        .unwrap();
    ScoringContext::new(captured_at, seed)
}

#[test]
fn default_config_selects_heuristic() {
    let analyzer = Analyzer::from_config(&ScoringConfig::default()).unwrap();

    assert_eq!(analyzer.strategy(), StrategyKind::Heuristic);
    assert_eq!(analyzer.version(), HEURISTIC_VERSION);
}

#[test]
fn baseline_can_be_chosen_explicitly() {
    let mut config = ScoringConfig::default();
    config.scoring.strategy = "baseline".to_string();
    let analyzer = Analyzer::from_config(&config).unwrap();

    let result = analyzer.analyze_with("hello", &Metadata::default(), &mut context(9, 1));
    assert_eq!(analyzer.strategy(), StrategyKind::Baseline);
    assert_eq!(result.algorithm_version, BASELINE_VERSION);
}

#[test]
fn unreadable_lexicon_falls_back_to_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ScoringConfig::default();
    config.lexicon.path = Some(dir.path().join("missing.toml"));

    let analyzer = Analyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.strategy(), StrategyKind::Baseline);
    assert_eq!(analyzer.version(), BASELINE_VERSION);
}

#[test]
fn out_of_range_lexicon_weight_falls_back_to_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    std::fs::write(&path, "[trending_topics]\nrust = 1.5\n").unwrap();

    let mut config = ScoringConfig::default();
    config.lexicon.path = Some(path);

    let analyzer = Analyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.strategy(), StrategyKind::Baseline);
}

#[test]
fn lexicon_file_replaces_only_listed_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    std::fs::write(&path, "[trending_topics]\nRust = 0.9\n").unwrap();

    let mut config = ScoringConfig::default();
    config.lexicon.path = Some(path);
    config.lexicon.toxic_words = ToxicWordList::Extended;
    config.reputation.jitter = 0.0;

    let analyzer = Analyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.strategy(), StrategyKind::Heuristic);

    let rust = analyzer.analyze_with("rust", &Metadata::default(), &mut context(9, 1));
    let said = analyzer.analyze_with("she said", &Metadata::default(), &mut context(9, 1));
    // 0.5 base plus 0.9 * 0.1 trending lift.
    assert!((rust.score.breakdown.user_reputation - 0.59).abs() < 1e-6);
    assert!((said.score.breakdown.user_reputation - 0.5).abs() < 1e-6);

    let awful = analyzer.analyze_with("awful", &Metadata::default(), &mut context(9, 1));
    assert!((awful.score.toxicity_score - 0.2).abs() < 1e-6);
}

#[test]
fn repeated_toxic_words_count_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    std::fs::write(&path, "toxic_words = [\"hate\", \"hate\", \"HATE\"]\n").unwrap();

    let mut config = ScoringConfig::default();
    config.lexicon.path = Some(path);

    let analyzer = Analyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.strategy(), StrategyKind::Heuristic);

    let clean = analyzer.analyze_with("lovely day", &Metadata::default(), &mut context(9, 1));
    let hostile = analyzer.analyze_with("I hate it", &Metadata::default(), &mut context(9, 1));
    assert!(clean.score.toxicity_score.abs() < 1e-6);
    assert!((hostile.score.toxicity_score - 0.2).abs() < 1e-6);
}

#[test]
fn blank_toxic_word_falls_back_to_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    std::fs::write(&path, "toxic_words = [\"hate\", \"\"]\n").unwrap();

    let mut config = ScoringConfig::default();
    config.lexicon.path = Some(path);

    let analyzer = Analyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.strategy(), StrategyKind::Baseline);
}

#[test]
fn out_of_range_jitter_is_a_config_error() {
    for jitter in [1e308, -0.1, f64::NAN, f64::INFINITY] {
        let mut config = ScoringConfig::default();
        config.reputation.jitter = jitter;

        assert!(
            matches!(Analyzer::from_config(&config), Err(AnalysisError::Config(_))),
            "jitter {} was accepted",
            jitter
        );
    }

    let mut config = ScoringConfig::default();
    config.reputation.jitter = 1.0;
    let analyzer = Analyzer::from_config(&config).unwrap();
    let result = analyzer.analyze_with("hello", &Metadata::default(), &mut context(9, 1));
    let reputation = result.score.breakdown.user_reputation;
    assert!((0.3..=0.9).contains(&reputation));
}

#[test]
fn missing_component_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ScoringConfig::default();
    config.components.required_paths = vec![dir.path().to_path_buf(), PathBuf::from("/definitely/not/here")];

    match Analyzer::from_config(&config) {
        Err(AnalysisError::MissingComponent(path)) => {
            assert_eq!(path, PathBuf::from("/definitely/not/here"));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected a missing component error"),
    }
}

#[test]
fn config_file_round_trips_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("scoring.toml");

    let mut config = ScoringConfig::default();
    config.scoring.strategy = "baseline".to_string();
    config.reputation.seed = Some(99);
    config.write(&path).unwrap();

    let loaded = ScoringConfig::from_file(&path).unwrap();
    assert_eq!(loaded.scoring.to_strategy(), StrategyKind::Baseline);
    assert_eq!(loaded.reputation.seed, Some(99));
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scoring.toml");
    std::fs::write(&path, "[timing\ncurve = ").unwrap();

    assert!(matches!(
        ScoringConfig::from_file(&path),
        Err(AnalysisError::Config(_))
    ));
}

#[test]
fn configured_seed_makes_reputation_repeatable() {
    let mut config = ScoringConfig::default();
    config.reputation.seed = Some(1234);
    let analyzer = Analyzer::from_config(&config).unwrap();

    let first = analyzer.analyze("Big AI launch today", &Metadata::default());
    let second = analyzer.analyze("Big AI launch today", &Metadata::default());

    assert_eq!(
        first.score.breakdown.user_reputation,
        second.score.breakdown.user_reputation
    );
}

#[test]
fn text_seed_makes_reputation_repeatable() {
    let mut config = ScoringConfig::default();
    config.reputation.seed_from_text = true;
    let analyzer = Analyzer::from_config(&config).unwrap();

    let first = analyzer.analyze("same words", &Metadata::default());
    let second = analyzer.analyze("same words", &Metadata::default());

    assert_eq!(
        first.score.breakdown.user_reputation,
        second.score.breakdown.user_reputation
    );
}

#[test]
fn result_serializes_to_documented_shape() {
    let analyzer = Analyzer::from_config(&ScoringConfig::default()).unwrap();
    let metadata = Metadata {
        author_id: None,
        tweet_id: Some("42".to_string()),
    };
    let result = analyzer.analyze_with("hello world", &metadata, &mut context(3, 5));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["algorithm_version"], "enhanced-ai-v2.0");
    assert!(json["processing_time"].is_u64());

    let score = &json["score"];
    assert!(score["heavy_ranker_score"].is_null());
    assert!(score["virality_score"].is_i64());
    assert_eq!(score["features"]["text"], "hello world");
    assert_eq!(score["features"]["length"], 11);
    assert!(score["features"]["author_id"].is_null());
    assert_eq!(score["features"]["tweet_id"], "42");
    assert_eq!(
        score["features"]["timestamp"],
        1_714_964_400_000_i64
    );

    let breakdown = score["breakdown"].as_object().unwrap();
    for key in [
        "content_quality",
        "social_signals",
        "timing",
        "user_reputation",
        "safety_score",
    ] {
        assert!(breakdown.contains_key(key), "missing {}", key);
    }

    let first = &json["suggestions"][0];
    assert_eq!(first["type"], "content");
    assert_eq!(first["priority"], "high");
    assert_eq!(first["expected_improvement"], 20);
}
