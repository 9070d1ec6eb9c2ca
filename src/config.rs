use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};
use crate::lexicon::ToxicWordList;
use crate::scoring::{ReputationConfig, TimingConfig, TimingCurve};
use crate::StrategyKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringModeConfig {
    pub strategy: String,
}

impl Default for ScoringModeConfig {
    fn default() -> Self {
        Self {
            strategy: "heuristic".to_string(),
        }
    }
}

impl ScoringModeConfig {
    pub fn to_strategy(&self) -> StrategyKind {
        match self.strategy.to_lowercase().as_str() {
            "baseline" | "legacy" => StrategyKind::Baseline,
            _ => StrategyKind::Heuristic,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// TOML file replacing some or all of the built-in keyword tables.
    pub path: Option<PathBuf>,
    pub toxic_words: ToxicWordList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Paths that must exist before any scoring happens.
    pub required_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub scoring: ScoringModeConfig,
    pub timing: TimingConfig,
    pub lexicon: LexiconConfig,
    pub reputation: ReputationConfig,
    pub components: ComponentsConfig,
}

impl ScoringConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => ScoringConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| AnalysisError::config(format!("failed to read config: {}", err)))?;
        toml::from_str(&contents)
            .map_err(|err| AnalysisError::config(format!("failed to parse config: {}", err)))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                AnalysisError::config(format!("failed to create config dir: {}", err))
            })?;
        }
        let payload = toml::to_string_pretty(self).map_err(|err| {
            AnalysisError::config(format!("failed to serialize config: {}", err))
        })?;
        std::fs::write(path, payload)
            .map_err(|err| AnalysisError::config(format!("failed to write config: {}", err)))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(strategy) = env::var("SCORING_STRATEGY") {
            if !strategy.trim().is_empty() {
                self.scoring.strategy = strategy;
            }
        }
        if let Ok(curve) = env::var("TIMING_CURVE") {
            if let Some(value) = TimingCurve::from_str(&curve) {
                self.timing.curve = value;
            }
        }
        if let Ok(list) = env::var("TOXIC_WORDS") {
            if let Some(value) = ToxicWordList::from_str(&list) {
                self.lexicon.toxic_words = value;
            }
        }
        if let Ok(seed) = env::var("REPUTATION_SEED") {
            if let Ok(value) = seed.trim().parse::<u64>() {
                self.reputation.seed = Some(value);
            }
        }
        if let Ok(jitter) = env::var("REPUTATION_JITTER") {
            if let Ok(value) = jitter.trim().parse::<f64>() {
                self.reputation.jitter = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("SCORING_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/scoring.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: ScoringConfig = toml::from_str(
            r#"
            [timing]
            curve = "peak_hours"

            [reputation]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.timing.curve, TimingCurve::PeakHours);
        assert_eq!(config.reputation.seed, Some(7));
        assert!((config.reputation.jitter - 0.1).abs() < 1e-12);
        assert_eq!(config.lexicon.toxic_words, ToxicWordList::Compact);
        assert_eq!(config.scoring.to_strategy(), StrategyKind::Heuristic);
    }

    #[test]
    fn unknown_strategy_means_heuristic() {
        let mode = ScoringModeConfig {
            strategy: "Baseline".to_string(),
        };
        assert_eq!(mode.to_strategy(), StrategyKind::Baseline);

        let mode = ScoringModeConfig {
            strategy: "something-else".to_string(),
        };
        assert_eq!(mode.to_strategy(), StrategyKind::Heuristic);
    }
}
