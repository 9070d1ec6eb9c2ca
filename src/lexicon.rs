use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{AnalysisError, Result};

const TRENDING_TOPICS: &[(&str, f64)] = &[
    ("ai", 0.9),
    ("artificial intelligence", 0.9),
    ("machine learning", 0.8),
    ("crypto", 0.8),
    ("bitcoin", 0.8),
    ("blockchain", 0.7),
    ("tech", 0.7),
    ("startup", 0.7),
    ("innovation", 0.6),
    ("breaking", 0.9),
    ("news", 0.6),
    ("update", 0.5),
    ("launch", 0.8),
    ("release", 0.7),
    ("announcement", 0.8),
];

const EMOTIONAL_WORDS: &[(&str, f64)] = &[
    ("amazing", 0.8),
    ("incredible", 0.8),
    ("shocking", 0.9),
    ("unbelievable", 0.8),
    ("mind-blowing", 0.9),
    ("wow", 0.7),
    ("excited", 0.6),
    ("thrilled", 0.7),
    ("pumped", 0.6),
    ("love", 0.6),
    ("hate", 0.5),
    ("angry", 0.4),
];

const CTA_WORDS: &[(&str, f64)] = &[
    ("what", 0.6),
    ("think", 0.7),
    ("opinion", 0.8),
    ("agree", 0.7),
    ("disagree", 0.8),
    ("thoughts", 0.8),
    ("share", 0.7),
    ("retweet", 0.6),
    ("comment", 0.6),
];

const PROFESSIONAL_WORDS: &[&str] = &["launch", "announce", "introduce", "release", "update"];

const COMPACT_TOXIC_WORDS: &[&str] = &["hate", "stupid", "idiot", "kill", "die"];

const EXTENDED_TOXIC_WORDS: &[&str] = &[
    "hate",
    "stupid",
    "idiot",
    "moron",
    "kill",
    "die",
    "damn",
    "hell",
    "crap",
    "suck",
    "terrible",
    "awful",
    "disgusting",
    "pathetic",
];

/// Which built-in toxic word list seeds the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToxicWordList {
    #[default]
    Compact,
    Extended,
}

impl ToxicWordList {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "compact" | "short" => Some(ToxicWordList::Compact),
            "extended" | "long" => Some(ToxicWordList::Extended),
            _ => None,
        }
    }

    pub fn words(self) -> &'static [&'static str] {
        match self {
            ToxicWordList::Compact => COMPACT_TOXIC_WORDS,
            ToxicWordList::Extended => EXTENDED_TOXIC_WORDS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    trending_topics: Option<BTreeMap<String, f64>>,
    emotional_words: Option<BTreeMap<String, f64>>,
    cta_words: Option<BTreeMap<String, f64>>,
    professional_words: Option<Vec<String>>,
    toxic_words: Option<Vec<String>>,
}

/// Keyword tables read by the sub-score calculators. Built once and shared
/// by reference; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lexicon {
    pub trending_topics: BTreeMap<String, f64>,
    pub emotional_words: BTreeMap<String, f64>,
    pub cta_words: BTreeMap<String, f64>,
    pub professional_words: Vec<String>,
    pub toxic_words: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin(ToxicWordList::default())
    }
}

impl Lexicon {
    pub fn builtin(toxic_words: ToxicWordList) -> Self {
        Self {
            trending_topics: weighted_table(TRENDING_TOPICS),
            emotional_words: weighted_table(EMOTIONAL_WORDS),
            cta_words: weighted_table(CTA_WORDS),
            professional_words: word_list(PROFESSIONAL_WORDS),
            toxic_words: word_list(toxic_words.words()),
        }
    }

    /// Reads a lexicon file. Tables the file leaves out keep their built-in
    /// contents, with `toxic_words` falling back to the given list.
    pub fn from_path(path: &Path, toxic_words: ToxicWordList) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            AnalysisError::lexicon(format!("failed to read {}: {}", path.display(), err))
        })?;
        let file: LexiconFile = toml::from_str(&contents).map_err(|err| {
            AnalysisError::lexicon(format!("failed to parse {}: {}", path.display(), err))
        })?;

        let builtin = Self::builtin(toxic_words);
        let lexicon = Self {
            trending_topics: file.trending_topics.unwrap_or(builtin.trending_topics),
            emotional_words: file.emotional_words.unwrap_or(builtin.emotional_words),
            cta_words: file.cta_words.unwrap_or(builtin.cta_words),
            professional_words: file.professional_words.unwrap_or(builtin.professional_words),
            toxic_words: file.toxic_words.unwrap_or(builtin.toxic_words),
        };
        Ok(lexicon.lowercased())
    }

    // Matching runs against lower-cased text, so entries must be lower-case too.
    fn lowercased(self) -> Self {
        Self {
            trending_topics: lowercase_table(self.trending_topics),
            emotional_words: lowercase_table(self.emotional_words),
            cta_words: lowercase_table(self.cta_words),
            professional_words: lowercase_list(self.professional_words),
            toxic_words: lowercase_list(self.toxic_words),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let tables = [
            ("trending_topics", &self.trending_topics),
            ("emotional_words", &self.emotional_words),
            ("cta_words", &self.cta_words),
        ];
        for (name, table) in tables {
            if table.is_empty() {
                return Err(AnalysisError::lexicon(format!("{} is empty", name)));
            }
            for (word, weight) in table {
                if word.trim().is_empty() {
                    return Err(AnalysisError::lexicon(format!("{} has a blank entry", name)));
                }
                if !weight.is_finite() || !(0.0..=1.0).contains(weight) {
                    return Err(AnalysisError::lexicon(format!(
                        "{} weight for {:?} must be within [0, 1], got {}",
                        name, word, weight
                    )));
                }
            }
        }

        let lists = [
            ("professional_words", &self.professional_words),
            ("toxic_words", &self.toxic_words),
        ];
        for (name, list) in lists {
            if list.iter().any(|word| word.trim().is_empty()) {
                return Err(AnalysisError::lexicon(format!("{} has a blank entry", name)));
            }
        }
        Ok(())
    }
}

fn weighted_table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(word, weight)| (word.to_string(), *weight))
        .collect()
}

fn word_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn lowercase_table(table: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    table
        .into_iter()
        .map(|(word, weight)| (word.to_lowercase(), weight))
        .collect()
}

// Each distinct word counts once, so case variants collapse here.
fn lowercase_list(list: Vec<String>) -> Vec<String> {
    list.into_iter()
        .map(|word| word.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
