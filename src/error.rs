use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint answered with HTTP {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("history storage IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One failed attempt, kept for the combined error message.
#[derive(Debug)]
pub struct StrategyFailure {
    pub strategy: &'static str,
    pub error: StrategyError,
}

impl fmt::Display for StrategyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.error)
    }
}

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("Please fill in: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },
    #[error("A greeting is already being generated")]
    Busy,
    #[error("No generation backend is configured (missing: {})", .missing.join(", "))]
    Configuration { missing: Vec<String> },
    #[error("Every generation strategy failed: {}", join_failures(.failures))]
    Exhausted { failures: Vec<StrategyFailure> },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn join_failures(failures: &[StrategyFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
