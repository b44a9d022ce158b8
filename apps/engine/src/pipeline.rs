//! Pipeline driver — scores every unscored job a store hands us.
//!
//! Persistence is an external collaborator behind the `JobStore` trait; the
//! driver only guarantees extraction-before-scoring within a job and
//! at-least-once persistence across retries (scoring is idempotent, so a
//! replayed job lands on the same result). Jobs are independent; a store
//! failure on one job is logged and counted, never fatal to the batch.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::{CandidateProfile, Job};
use crate::scoring::{score_description, JobScore, ScoringPolicy, SkillExtractor, SkillVocabulary};

/// Persistence seam supplied by the external collaborator.
///
/// Carried as `&dyn JobStore`; implementations must be safe to call from
/// concurrent workers.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn fetch_unscored(&self) -> Result<Vec<Job>, EngineError>;
    async fn persist_score(&self, job_id: Uuid, score: &JobScore) -> Result<(), EngineError>;
}

/// Outcome of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub fetched: usize,
    pub scored: usize,
    pub failed: usize,
}

pub struct ScoringPipeline {
    extractor: SkillExtractor,
    profile: CandidateProfile,
    policy: ScoringPolicy,
}

impl ScoringPipeline {
    pub fn new(
        vocabulary: Arc<SkillVocabulary>,
        profile: CandidateProfile,
        policy: ScoringPolicy,
    ) -> Self {
        Self {
            extractor: SkillExtractor::new(vocabulary),
            profile,
            policy,
        }
    }

    /// Scores a single job. Pure: same job and profile always produce the
    /// same `JobScore`.
    pub fn score_one(&self, job: &Job) -> JobScore {
        score_description(
            &self.extractor,
            &job.description,
            &job.must_haves,
            &self.profile.skill_set(),
            &self.policy,
        )
    }

    /// Fetches unscored jobs from the store, scores each, and persists the
    /// results. Degenerate job text never aborts the batch — anomalies are
    /// already encoded in the per-job `ScoreResult`.
    pub async fn run(&self, store: &dyn JobStore) -> Result<BatchSummary, EngineError> {
        let started = Instant::now();
        let jobs = store.fetch_unscored().await?;

        if jobs.is_empty() {
            info!("No unscored jobs found");
            return Ok(BatchSummary {
                fetched: 0,
                scored: 0,
                failed: 0,
            });
        }
        info!("Found {} jobs to score", jobs.len());

        let mut scored = 0usize;
        let mut failed = 0usize;

        for job in &jobs {
            let job_score = self.score_one(job);
            debug!(
                "Job scored: {} ({} @ {}) — {}/100, {} skills",
                job.id,
                job.title,
                job.company,
                job_score.result.score,
                job_score.extracted_skills.len()
            );

            match store.persist_score(job.id, &job_score).await {
                Ok(()) => scored += 1,
                Err(e) => {
                    error!("Failed to persist score for job {}: {e}", job.id);
                    failed += 1;
                }
            }
        }

        let summary = BatchSummary {
            fetched: jobs.len(),
            scored,
            failed,
        };
        info!(
            "Job scoring completed: {}/{} jobs in {:.2}s ({} failed)",
            summary.scored,
            summary.fetched,
            started.elapsed().as_secs_f64(),
            summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryStore {
        jobs: Vec<Job>,
        results: Mutex<HashMap<Uuid, JobScore>>,
        /// Job ids whose persist call should fail, to exercise the
        /// continue-on-error path.
        fail_on: Vec<Uuid>,
    }

    impl InMemoryStore {
        fn new(jobs: Vec<Job>) -> Self {
            Self {
                jobs,
                results: Mutex::new(HashMap::new()),
                fail_on: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl JobStore for InMemoryStore {
        async fn fetch_unscored(&self) -> Result<Vec<Job>, EngineError> {
            let results = self.results.lock().unwrap();
            Ok(self
                .jobs
                .iter()
                .filter(|j| !results.contains_key(&j.id))
                .cloned()
                .collect())
        }

        async fn persist_score(&self, job_id: Uuid, score: &JobScore) -> Result<(), EngineError> {
            if self.fail_on.contains(&job_id) {
                return Err(EngineError::Store("simulated write failure".to_string()));
            }
            self.results.lock().unwrap().insert(job_id, score.clone());
            Ok(())
        }
    }

    fn make_job(description: &str, must_haves: &[&str]) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            description: description.to_string(),
            must_haves: must_haves.iter().map(|s| s.to_string()).collect(),
            location: None,
            scored_at: None,
        }
    }

    fn make_pipeline() -> ScoringPipeline {
        let profile = CandidateProfile {
            skills: vec!["python".to_string(), "docker".to_string(), "sql".to_string()],
            max_experience_years: 5,
            prohibited_claims: vec![],
            verified_achievements: vec![],
        };
        ScoringPipeline::new(
            Arc::new(SkillVocabulary::default_bank()),
            profile,
            ScoringPolicy::default(),
        )
    }

    #[tokio::test]
    async fn test_run_scores_all_fetched_jobs() {
        let store = InMemoryStore::new(vec![
            make_job("Python and Docker role", &[]),
            make_job("Rust and Kubernetes role", &[]),
        ]);
        let pipeline = make_pipeline();

        let summary = pipeline.run(&store).await.unwrap();
        assert_eq!(summary.fetched, 2);
        assert_eq!(summary.scored, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(store.results.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_second_run_is_noop_once_persisted() {
        let store = InMemoryStore::new(vec![make_job("Python role", &[])]);
        let pipeline = make_pipeline();

        pipeline.run(&store).await.unwrap();
        let summary = pipeline.run(&store).await.unwrap();
        assert_eq!(summary.fetched, 0);
    }

    #[tokio::test]
    async fn test_rescore_is_idempotent() {
        let job = make_job(
            "Looking for a Python developer with AWS and Docker experience",
            &["Python"],
        );
        let pipeline = make_pipeline();

        let a = pipeline.score_one(&job);
        let b = pipeline.score_one(&job);
        assert_eq!(a.result, b.result);
        assert_eq!(a.extracted_skills, b.extracted_skills);
    }

    #[tokio::test]
    async fn test_store_failure_on_one_job_does_not_abort_batch() {
        let jobs = vec![
            make_job("Python role", &[]),
            make_job("Docker role", &[]),
        ];
        let failing_id = jobs[0].id;
        let mut store = InMemoryStore::new(jobs);
        store.fail_on.push(failing_id);
        let pipeline = make_pipeline();

        let summary = pipeline.run(&store).await.unwrap();
        assert_eq!(summary.fetched, 2);
        assert_eq!(summary.scored, 1);
        assert_eq!(summary.failed, 1);
    }

    #[tokio::test]
    async fn test_degenerate_description_does_not_abort() {
        let store = InMemoryStore::new(vec![make_job("", &[]), make_job("Python role", &[])]);
        let pipeline = make_pipeline();

        let summary = pipeline.run(&store).await.unwrap();
        assert_eq!(summary.scored, 2);

        let results = store.results.lock().unwrap();
        let empty_scores: Vec<u32> = results.values().map(|s| s.result.score).collect();
        assert!(empty_scores.contains(&0)); // empty description → score 0
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryStore::new(vec![]);
        let pipeline = make_pipeline();
        let summary = pipeline.run(&store).await.unwrap();
        assert_eq!(
            summary,
            BatchSummary {
                fetched: 0,
                scored: 0,
                failed: 0
            }
        );
    }
}
