use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Detailed comparison of job skills against candidate skills, for reports
/// and dashboards. Lists are sorted for stable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub common_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    /// Percentage of job skills the candidate covers, 0–100.
    pub overlap_percentage: u32,
}

pub fn analyze_skills(job_skills: &[String], candidate_skills: &HashSet<String>) -> SkillAnalysis {
    let job: HashSet<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let candidate: HashSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut common_skills: Vec<String> = job.intersection(&candidate).cloned().collect();
    let mut missing_skills: Vec<String> = job.difference(&candidate).cloned().collect();
    let mut extra_skills: Vec<String> = candidate.difference(&job).cloned().collect();
    common_skills.sort();
    missing_skills.sort();
    extra_skills.sort();

    let overlap_percentage = if job.is_empty() {
        0
    } else {
        (100.0 * common_skills.len() as f64 / job.len() as f64).round() as u32
    };

    SkillAnalysis {
        common_skills,
        missing_skills,
        extra_skills,
        overlap_percentage,
    }
}
