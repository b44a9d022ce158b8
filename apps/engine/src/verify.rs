//! Truth verifier — the compliance guardrail for generated application
//! content. Every claim in a resume bullet or cover letter must be backed by
//! the candidate profile: no prohibited phrases, no inflated experience
//! years, no technologies the candidate has never used, no invented
//! quantified achievements.
//!
//! Dirty content produces a `ContentReport` listing the issues; it is never
//! an error. Callers decide whether to block, regenerate, or flag for review.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::CandidateProfile;
use crate::scoring::{SkillExtractor, SkillVocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    ProhibitedClaim,
    InflatedExperience,
    UnverifiedTechnology,
    UnverifiedAchievement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentIssue {
    pub kind: IssueKind,
    pub found_text: String,
    pub description: String,
}

/// Verification outcome for one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentReport {
    pub verified: bool,
    pub issues: Vec<ContentIssue>,
    /// Canonical technologies mentioned in the content, for transparency.
    pub technologies_mentioned: Vec<String>,
}

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\+?\s*years?\b(?:\s+(?:of\s+)?(?:experience|in|with|using))?")
        .unwrap()
});

static IMPROVEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:improved|increased|reduced|decreased|optimized)\b[^.]{0,60}?\bby\s+(\d{1,3})%",
    )
    .unwrap()
});

static BARE_PERCENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,3})%\s+(?:improvement|increase|reduction|decrease)\b").unwrap()
});

/// Improvement claims above this percentage must appear among the profile's
/// verified achievements.
const LARGE_CLAIM_PERCENT: u32 = 50;

pub struct TruthVerifier {
    extractor: SkillExtractor,
}

impl TruthVerifier {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self {
            extractor: SkillExtractor::new(vocabulary),
        }
    }

    pub fn verify(&self, content: &str, profile: &CandidateProfile) -> ContentReport {
        debug!("Verifying content ({} chars)", content.len());

        let mut issues = Vec::new();
        let content_lower = content.to_lowercase();

        // Prohibited phrases from the profile.
        for claim in &profile.prohibited_claims {
            let lowered = claim.to_lowercase();
            if !lowered.trim().is_empty() && content_lower.contains(&lowered) {
                issues.push(ContentIssue {
                    kind: IssueKind::ProhibitedClaim,
                    found_text: claim.clone(),
                    description: format!("Prohibited claim found: '{claim}'"),
                });
            }
        }

        // Experience-year inflation.
        for caps in EXPERIENCE_RE.captures_iter(content) {
            let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
                continue;
            };
            if years > profile.max_experience_years {
                let found = caps.get(0).map_or("", |m| m.as_str()).to_string();
                issues.push(ContentIssue {
                    kind: IssueKind::InflatedExperience,
                    description: format!(
                        "Experience claim of {years} years exceeds verified maximum of {}",
                        profile.max_experience_years
                    ),
                    found_text: found,
                });
            }
        }

        // Technologies not backed by the profile. The extractor already
        // enforces whole-word matching against the canonical vocabulary.
        let technologies_mentioned = self.extractor.extract(content);
        let skill_set = profile.skill_set();
        for tech in &technologies_mentioned {
            if !skill_set.contains(&tech.to_lowercase()) {
                issues.push(ContentIssue {
                    kind: IssueKind::UnverifiedTechnology,
                    found_text: tech.clone(),
                    description: format!(
                        "Technology '{tech}' mentioned but not in the candidate's verified skills"
                    ),
                });
            }
        }

        // Large quantified improvement claims must be verified.
        let achievements_lower: Vec<String> = profile
            .verified_achievements
            .iter()
            .map(|a| a.to_lowercase())
            .collect();
        for caps in IMPROVEMENT_RE
            .captures_iter(content)
            .chain(BARE_PERCENT_RE.captures_iter(content))
        {
            let Some(percent) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
                continue;
            };
            if percent <= LARGE_CLAIM_PERCENT {
                continue;
            }
            let needle = format!("{percent}%");
            if achievements_lower.iter().any(|a| a.contains(&needle)) {
                continue;
            }
            let found = caps.get(0).map_or("", |m| m.as_str()).to_string();
            issues.push(ContentIssue {
                kind: IssueKind::UnverifiedAchievement,
                description: format!(
                    "Large improvement claim ({percent}%) not found in verified achievements"
                ),
                found_text: found,
            });
        }

        ContentReport {
            verified: issues.is_empty(),
            issues,
            technologies_mentioned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["python".to_string(), "docker".to_string()],
            max_experience_years: 5,
            prohibited_claims: vec!["led a team of 50".to_string()],
            verified_achievements: vec!["Reduced API latency by 70% via caching".to_string()],
        }
    }

    fn verifier() -> TruthVerifier {
        TruthVerifier::new(Arc::new(SkillVocabulary::default_bank()))
    }

    #[test]
    fn test_clean_content_passes() {
        let report = verifier().verify(
            "Built Python services deployed with Docker over 4 years of experience.",
            &profile(),
        );
        assert!(report.verified, "issues: {:?}", report.issues);
        assert!(report.technologies_mentioned.contains(&"python".to_string()));
    }

    #[test]
    fn test_inflated_experience_flagged() {
        let report = verifier().verify("I have 10+ years of experience with Python.", &profile());
        assert!(!report.verified);
        assert!(report
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::InflatedExperience));
    }

    #[test]
    fn test_years_at_maximum_allowed() {
        let report = verifier().verify("5 years of experience with Python.", &profile());
        assert!(report.verified, "issues: {:?}", report.issues);
    }

    #[test]
    fn test_prohibited_claim_flagged() {
        let report = verifier().verify("Led a team of 50 engineers.", &profile());
        assert!(!report.verified);
        assert!(report
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::ProhibitedClaim));
    }

    #[test]
    fn test_unverified_technology_flagged() {
        let report = verifier().verify("Expert in Kubernetes and Python.", &profile());
        assert!(!report.verified);
        let issue = report
            .issues
            .iter()
            .find(|i| i.kind == IssueKind::UnverifiedTechnology)
            .unwrap();
        assert_eq!(issue.found_text, "kubernetes");
    }

    #[test]
    fn test_verified_achievement_passes() {
        let report = verifier().verify(
            "Reduced request latency by 70% through Python caching work.",
            &profile(),
        );
        assert!(report.verified, "issues: {:?}", report.issues);
    }

    #[test]
    fn test_unverified_large_claim_flagged() {
        let report = verifier().verify("Improved throughput by 90% in one quarter.", &profile());
        assert!(!report.verified);
        assert!(report
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::UnverifiedAchievement));
    }

    #[test]
    fn test_small_claim_not_flagged() {
        let report = verifier().verify("Improved test coverage by 20%.", &profile());
        assert!(report.verified, "issues: {:?}", report.issues);
    }

    #[test]
    fn test_empty_content() {
        let report = verifier().verify("", &profile());
        assert!(report.verified);
        assert!(report.technologies_mentioned.is_empty());
    }
}
