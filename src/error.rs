use std::path::PathBuf;

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("lexicon error: {0}")]
    Lexicon(String),
    #[error("required algorithm component not found: {}", .0.display())]
    MissingComponent(PathBuf),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn config(err: impl std::fmt::Display) -> Self {
        Self::Config(err.to_string())
    }

    pub fn lexicon(err: impl std::fmt::Display) -> Self {
        Self::Lexicon(err.to_string())
    }
}
