use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// The candidate's declared, verified background.
///
/// `skills` are canonical skill names; comparisons against extracted job
/// skills are case-insensitive. The remaining fields back the truth verifier:
/// nothing the candidate has not actually done may appear in generated
/// application content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    /// Largest experience-year figure the candidate can truthfully claim.
    #[serde(default = "default_max_experience_years")]
    pub max_experience_years: u32,
    /// Phrases that must never appear in generated content.
    #[serde(default)]
    pub prohibited_claims: Vec<String>,
    /// Quantified achievements the candidate can back up, verbatim.
    #[serde(default)]
    pub verified_achievements: Vec<String>,
}

fn default_max_experience_years() -> u32 {
    5
}

impl CandidateProfile {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Profile(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| EngineError::Profile(format!("invalid profile JSON in {}: {e}", path.display())))
    }

    /// Lowercased skill set for case-insensitive matching.
    pub fn skill_set(&self) -> HashSet<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }
}
