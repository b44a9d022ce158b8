use anyhow::{Context, Result};

/// Engine configuration loaded from environment variables.
/// Fails fast at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub jobs_file: String,
    pub profile_file: String,
    pub output_file: String,
    pub vocabulary_file: Option<String>,
    pub rust_log: String,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(EngineConfig {
            jobs_file: require_env("JOBS_FILE")?,
            profile_file: require_env("PROFILE_FILE")?,
            output_file: std::env::var("OUTPUT_FILE")
                .unwrap_or_else(|_| "scored_jobs.json".to_string()),
            vocabulary_file: std::env::var("VOCABULARY_FILE").ok(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
