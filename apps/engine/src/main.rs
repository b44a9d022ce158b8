//! Cron-invoked pipeline entry point: load config, vocabulary, and profile,
//! score every unscored job in the input file, and write the results out.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use engine::config::EngineConfig;
use engine::errors::EngineError;
use engine::models::{CandidateProfile, Job};
use engine::pipeline::{JobStore, ScoringPipeline};
use engine::scoring::{JobScore, ScoringPolicy, SkillVocabulary};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = EngineConfig::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobBot scoring engine v{}", env!("CARGO_PKG_VERSION"));

    // Build-then-freeze: the vocabulary is constructed once here and shared
    // read-only for the rest of the run.
    let vocabulary = match &config.vocabulary_file {
        Some(path) => SkillVocabulary::from_json_file(path)?,
        None => SkillVocabulary::default_bank(),
    };
    info!("Skill vocabulary loaded ({} canonical skills)", vocabulary.len());

    let profile = CandidateProfile::from_json_file(&config.profile_file)?;
    info!("Candidate profile loaded ({} skills)", profile.skills.len());

    let store = JsonFileStore::load(&config.jobs_file)?;
    let pipeline = ScoringPipeline::new(Arc::new(vocabulary), profile, ScoringPolicy::default());

    let summary = pipeline.run(&store).await?;
    store.write_output(&config.output_file)?;

    info!(
        "Wrote {} scored jobs to {} ({} failed)",
        summary.scored, config.output_file, summary.failed
    );
    Ok(())
}

/// File-backed store for cron runs: jobs come from a JSON array on disk and
/// scored records are written to the output path at the end of the run.
struct JsonFileStore {
    jobs: Vec<Job>,
    results: Mutex<HashMap<Uuid, JobScore>>,
}

#[derive(Serialize)]
struct ScoredRecord<'a> {
    id: Uuid,
    title: &'a str,
    company: &'a str,
    score: u32,
    matched_skills: &'a [String],
    match_reasons: &'a [String],
    extracted_skills: &'a [String],
    scored_at: chrono::DateTime<Utc>,
}

impl JsonFileStore {
    fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read jobs file '{path}'"))?;
        let jobs: Vec<Job> =
            serde_json::from_str(&raw).with_context(|| format!("invalid jobs JSON in '{path}'"))?;
        Ok(Self {
            jobs,
            results: Mutex::new(HashMap::new()),
        })
    }

    fn write_output(&self, path: &str) -> Result<()> {
        let results = self
            .results
            .lock()
            .map_err(|_| anyhow::anyhow!("results lock poisoned"))?;
        let now = Utc::now();
        let records: Vec<ScoredRecord<'_>> = self
            .jobs
            .iter()
            .filter_map(|job| {
                results.get(&job.id).map(|score| ScoredRecord {
                    id: job.id,
                    title: &job.title,
                    company: &job.company,
                    score: score.result.score,
                    matched_skills: &score.result.matched_skills,
                    match_reasons: &score.result.match_reasons,
                    extracted_skills: &score.extracted_skills,
                    scored_at: now,
                })
            })
            .collect();
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json).with_context(|| format!("cannot write output '{path}'"))?;
        Ok(())
    }
}

#[async_trait]
impl JobStore for JsonFileStore {
    async fn fetch_unscored(&self) -> Result<Vec<Job>, EngineError> {
        let results = self
            .results
            .lock()
            .map_err(|_| EngineError::Store("results lock poisoned".to_string()))?;
        Ok(self
            .jobs
            .iter()
            .filter(|j| !j.is_scored() && !results.contains_key(&j.id))
            .cloned()
            .collect())
    }

    async fn persist_score(&self, job_id: Uuid, score: &JobScore) -> Result<(), EngineError> {
        let mut results = self
            .results
            .lock()
            .map_err(|_| EngineError::Store("results lock poisoned".to_string()))?;
        results.insert(job_id, score.clone());
        Ok(())
    }
}
