use thiserror::Error;

/// Failure classes of a solve. Every variant aborts the current instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Score mismatch: expected {expected}, recomputed {actual}")]
    ScoreMismatch { expected: u64, actual: u64 },

    #[error("Sampling exhausted: {0}")]
    SamplingExhausted(String),
}

impl SlideshowError {
    /// Classifies an error produced anywhere in the workspace.
    pub fn classify(err: &anyhow::Error) -> Option<&SlideshowError> {
        err.downcast_ref::<SlideshowError>()
    }
}
