//! Scorer — combines extracted job skills, must-have phrases, and the
//! candidate's skill set into a 0–100 compatibility score with
//! human-readable reasons.
//!
//! `score_job` is a pure function of its inputs: no I/O, no shared mutable
//! state. Re-scoring the same inputs always yields an identical result, so
//! the pipeline driver may safely retry.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Tunable scoring constants.
///
/// The must-have cap and the reason thresholds are deliberate policy choices,
/// not magic numbers; override the default when acceptance criteria differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Ceiling applied when any must-have requirement is unsatisfied. Kept
    /// well below passing so partial matches stay visible for human review
    /// instead of being zeroed.
    pub must_have_cap: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self { must_have_cap: 40 }
    }
}

/// The scoring contract consumed by the persistence layer and API responses.
/// Field names and types must not change without a migration note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Compatibility score, always within 0–100.
    pub score: u32,
    /// Canonical skills present in both the job and the candidate profile,
    /// ordered by first appearance in the description.
    pub matched_skills: Vec<String>,
    /// One reason per matched skill, then one per failed must-have.
    pub match_reasons: Vec<String>,
}

/// Scores a job against a candidate.
///
/// * `extracted_skills` — canonical skills found in the description, in
///   first-match order (see `SkillExtractor::extract`).
/// * `description` — the raw job text, used for must-have substring checks.
/// * `must_haves` — requirement phrases; each must appear in the description
///   or in the candidate skill set, else the cap applies.
/// * `candidate_skills` — the candidate's skills; not required to be
///   pre-validated against the vocabulary.
pub fn score_job(
    extracted_skills: &[String],
    description: &str,
    must_haves: &[String],
    candidate_skills: &HashSet<String>,
    policy: &ScoringPolicy,
) -> ScoreResult {
    let candidate: HashSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    // An empty candidate skill set is a profile misconfiguration. Surface it
    // in the result rather than raising, so batch runs keep going.
    if candidate.is_empty() {
        return ScoreResult {
            score: 0,
            matched_skills: Vec::new(),
            match_reasons: vec!["No candidate skills configured".to_string()],
        };
    }

    let matched_skills: Vec<String> = extracted_skills
        .iter()
        .filter(|s| candidate.contains(&s.to_lowercase()))
        .cloned()
        .collect();

    let base = (100.0 * matched_skills.len() as f64 / extracted_skills.len().max(1) as f64)
        .round()
        .clamp(0.0, 100.0) as u32;

    let description_lower = description.to_lowercase();
    let failed_must_haves: Vec<&String> = must_haves
        .iter()
        .filter(|phrase| !phrase.trim().is_empty())
        .filter(|phrase| {
            let lowered = phrase.to_lowercase();
            // Unknown phrases fall through both checks and count as
            // unsatisfied — never silently ignored.
            !(description_lower.contains(&lowered) || candidate.contains(&lowered))
        })
        .collect();

    let score = if failed_must_haves.is_empty() {
        base
    } else {
        base.min(policy.must_have_cap)
    };

    let mut match_reasons: Vec<String> = matched_skills
        .iter()
        .map(|s| format!("Matches required skill: {s}"))
        .collect();
    match_reasons.extend(
        failed_must_haves
            .iter()
            .map(|p| format!("Missing required: {p}")),
    );

    ScoreResult {
        score,
        matched_skills,
        match_reasons,
    }
}
