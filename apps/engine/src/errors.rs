use thiserror::Error;

/// Engine-level error type.
///
/// Only unrecoverable invariant violations surface here (a vocabulary or
/// profile that failed to load, a store that cannot be reached). Per-job
/// scoring anomalies — degenerate descriptions, empty candidate skill sets,
/// unsatisfied must-haves — are encoded in `ScoreResult`, never raised, so a
/// batch run over many jobs does not abort because one job's text is bad.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
