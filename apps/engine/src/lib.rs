//! JobBot scoring engine: parses job descriptions into canonical skills,
//! scores them against a candidate profile with must-have gating, and runs
//! the compliance checks (location/visa enrichment, truth verification) that
//! the surrounding automation depends on.

pub mod config;
pub mod enrichment;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod verify;

pub use config::EngineConfig;
pub use errors::EngineError;
pub use models::{CandidateProfile, Job};
pub use pipeline::{BatchSummary, JobStore, ScoringPipeline};
pub use scoring::{JobScore, ScoreResult, ScoringPolicy, SkillExtractor, SkillVocabulary};
