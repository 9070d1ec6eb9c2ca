use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::lexicon::Lexicon;
use crate::scoring::signals::{has_professional_language, trending_score};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationConfig {
    /// Fixed seed for the simulated per-user variation.
    pub seed: Option<u64>,
    /// Derive the seed from the post text so identical posts score identically.
    pub seed_from_text: bool,
    /// Half-width of the uniform perturbation; 0 turns it off.
    pub jitter: f64,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            seed_from_text: false,
            jitter: 0.1,
        }
    }
}

impl ReputationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.jitter.is_finite() || !(0.0..=1.0).contains(&self.jitter) {
            return Err(AnalysisError::config(format!(
                "reputation jitter must be within [0, 1], got {}",
                self.jitter
            )));
        }
        Ok(())
    }
}

/// Simulated author reputation inferred from how sophisticated the text is.
#[derive(Debug, Clone)]
pub struct ReputationScorer {
    jitter: f64,
}

impl ReputationScorer {
    /// Expects a config that passed [`ReputationConfig::validate`].
    pub fn new(config: &ReputationConfig) -> Self {
        Self {
            jitter: config.jitter,
        }
    }

    pub fn score(&self, text: &str, lexicon: &Lexicon, rng: &mut dyn RngCore) -> f64 {
        let mut score = 0.5;

        if text.chars().count() > 100 {
            score += 0.1;
        }
        score += trending_score(text, lexicon) * 0.1;
        if has_professional_language(text, lexicon) {
            score += 0.1;
        }
        if self.jitter > 0.0 {
            score += rng.gen_range(-self.jitter..=self.jitter);
        }

        score.clamp(0.3, 0.9)
    }
}
