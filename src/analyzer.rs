use std::time::Instant;

use tracing::{info, warn};

use crate::config::{ComponentsConfig, ScoringConfig};
use crate::error::{AnalysisError, Result};
use crate::features::Metadata;
use crate::lexicon::Lexicon;
use crate::scoring::{
    BaselineScorer, HeuristicScorer, ReputationConfig, ScoringContext, ViralityScorer,
};
use crate::{stable_hash64, AlgorithmResult, StrategyKind};

/// Holds the selected scoring strategy and runs one stateless analysis per
/// call.
pub struct Analyzer {
    scorer: Box<dyn ViralityScorer>,
    strategy: StrategyKind,
    reputation: ReputationConfig,
}

impl Analyzer {
    /// Fails when a required component path is missing or the reputation
    /// settings are out of range. A preferred strategy that cannot be built
    /// is replaced by the baseline scorer.
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        check_components(&config.components)?;
        config.reputation.validate()?;

        let preferred = config.scoring.to_strategy();
        let (scorer, strategy): (Box<dyn ViralityScorer>, StrategyKind) = match preferred {
            StrategyKind::Heuristic => match build_heuristic(config) {
                Ok(scorer) => (Box::new(scorer), StrategyKind::Heuristic),
                Err(err) => {
                    warn!(error = %err, "heuristic scorer unavailable, falling back to baseline");
                    (Box::new(BaselineScorer::new()), StrategyKind::Baseline)
                }
            },
            StrategyKind::Baseline => (Box::new(BaselineScorer::new()), StrategyKind::Baseline),
        };

        info!(
            strategy = strategy.label(),
            version = scorer.version(),
            "scoring strategy selected"
        );

        Ok(Self {
            scorer,
            strategy,
            reputation: config.reputation.clone(),
        })
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn version(&self) -> &'static str {
        self.scorer.version()
    }

    /// Builds a wall-clock context. Seed precedence: `seed_override`, the
    /// configured seed, the text hash when enabled, then OS entropy.
    pub fn context_for(&self, text: &str, seed_override: Option<u64>) -> ScoringContext {
        let seed = seed_override.or(self.reputation.seed).or_else(|| {
            self.reputation
                .seed_from_text
                .then(|| stable_hash64(text))
        });
        ScoringContext::now(seed)
    }

    pub fn analyze(&self, text: &str, metadata: &Metadata) -> AlgorithmResult {
        let mut ctx = self.context_for(text, None);
        self.analyze_with(text, metadata, &mut ctx)
    }

    pub fn analyze_with(
        &self,
        text: &str,
        metadata: &Metadata,
        ctx: &mut ScoringContext,
    ) -> AlgorithmResult {
        let started = Instant::now();
        let scored = self.scorer.score(text, metadata, ctx);
        let processing_time = started.elapsed().as_millis() as u64;

        AlgorithmResult {
            score: scored.score,
            suggestions: scored.suggestions,
            algorithm_version: self.scorer.version().to_string(),
            processing_time,
        }
    }
}

fn build_heuristic(config: &ScoringConfig) -> Result<HeuristicScorer> {
    let lexicon = match config.lexicon.path.as_ref() {
        Some(path) => Lexicon::from_path(path, config.lexicon.toxic_words)?,
        None => Lexicon::builtin(config.lexicon.toxic_words),
    };
    lexicon.validate()?;

    Ok(HeuristicScorer::new(
        lexicon,
        config.timing.clone(),
        &config.reputation,
    ))
}

fn check_components(components: &ComponentsConfig) -> Result<()> {
    for path in &components.required_paths {
        if !path.exists() {
            return Err(AnalysisError::MissingComponent(path.clone()));
        }
    }
    Ok(())
}
