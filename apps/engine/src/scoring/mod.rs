//! The scoring core: skill vocabulary, extractor, scorer, and skill analysis.
//!
//! Everything here is pure and synchronous. The vocabulary is built once and
//! frozen; each scoring call is independent, so arbitrary concurrent workers
//! may share one vocabulary without locking.

pub mod analysis;
pub mod extractor;
pub mod scorer;
pub mod vocabulary;

pub use analysis::{analyze_skills, SkillAnalysis};
pub use extractor::SkillExtractor;
pub use scorer::{score_job, ScoreResult, ScoringPolicy};
pub use vocabulary::{SkillVocabulary, VocabEntry, VocabularyBuilder};

use serde::{Deserialize, Serialize};

/// Full scoring output for one job: what was found, how it scored, and the
/// skill-level comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobScore {
    pub extracted_skills: Vec<String>,
    pub result: ScoreResult,
    pub analysis: SkillAnalysis,
}

/// End-to-end scoring of a raw description: extract, score, analyze.
pub fn score_description(
    extractor: &SkillExtractor,
    description: &str,
    must_haves: &[String],
    candidate_skills: &std::collections::HashSet<String>,
    policy: &ScoringPolicy,
) -> JobScore {
    let extracted_skills = extractor.extract(description);
    let result = score_job(
        &extracted_skills,
        description,
        must_haves,
        candidate_skills,
        policy,
    );
    let analysis = analyze_skills(&extracted_skills, candidate_skills);
    JobScore {
        extracted_skills,
        result,
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_scenario() {
        let extractor = SkillExtractor::new(Arc::new(SkillVocabulary::default_bank()));
        let candidate = ["python", "docker", "sql"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let scored = score_description(
            &extractor,
            "Looking for a Python developer with AWS and Docker experience",
            &["Python".to_string()],
            &candidate,
            &ScoringPolicy::default(),
        );

        assert_eq!(scored.extracted_skills, vec!["python", "aws", "docker"]);
        assert_eq!(scored.result.score, 67);
        assert_eq!(scored.result.matched_skills, vec!["python", "docker"]);
        assert_eq!(scored.analysis.missing_skills, vec!["aws"]);
    }

    #[test]
    fn test_end_to_end_unsatisfied_must_have() {
        let extractor = SkillExtractor::new(Arc::new(SkillVocabulary::default_bank()));
        let candidate = ["python", "docker", "sql"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let scored = score_description(
            &extractor,
            "Looking for a Python developer with AWS and Docker experience",
            &["Kubernetes".to_string()],
            &candidate,
            &ScoringPolicy::default(),
        );

        assert_eq!(scored.result.score, 40);
    }

    #[test]
    fn test_matched_skills_subset_of_vocabulary_and_overlap() {
        // Subset invariant: matched ⊆ vocabulary and matched ⊆ extracted ∩ candidate.
        let vocab = Arc::new(SkillVocabulary::default_bank());
        let extractor = SkillExtractor::new(vocab.clone());
        let candidate: std::collections::HashSet<String> = ["python", "made-up-skill"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let scored = score_description(
            &extractor,
            "Python and Kubernetes and made-up-skill",
            &[],
            &candidate,
            &ScoringPolicy::default(),
        );

        for skill in &scored.result.matched_skills {
            assert!(vocab.contains(skill));
            assert!(scored.extracted_skills.contains(skill));
            assert!(candidate.contains(skill));
        }
    }
}
