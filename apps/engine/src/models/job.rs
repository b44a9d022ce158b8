use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scraped job posting, as handed to the scoring pipeline.
///
/// Skills and score are derived, not primary — they are produced by the
/// extractor/scorer and persisted back through the `JobStore` seam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    /// Free-text job description (may include a requirements section).
    pub description: String,
    /// Requirement phrases whose absence caps the compatibility score.
    #[serde(default)]
    pub must_haves: Vec<String>,
    /// Raw location field from the source board, if any.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub scored_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn is_scored(&self) -> bool {
        self.scored_at.is_some()
    }
}
