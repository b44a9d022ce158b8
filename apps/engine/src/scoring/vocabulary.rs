//! Skill vocabulary — the fixed canonical-skill → synonym mapping.
//!
//! Built once at process start (builder, JSON file, or the built-in bank),
//! then frozen. Extraction and scoring take the vocabulary by shared
//! reference; nothing mutates it after construction, so it can be handed to
//! concurrent workers behind an `Arc` without locking.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// One canonical skill plus its surface-form synonyms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    pub canonical: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A surface form searchable in job text, pointing back at its canonical.
#[derive(Debug, Clone)]
pub(crate) struct SurfaceForm {
    pub text: String,
    pub canonical_idx: usize,
}

/// Immutable skill vocabulary. All stored forms are lowercased.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    canonicals: Vec<String>,
    /// Every searchable form (canonical name + synonyms), sorted longest
    /// first so a short synonym never shadows a longer, more specific one.
    surface_forms: Vec<SurfaceForm>,
}

impl SkillVocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    pub fn from_entries(entries: Vec<VocabEntry>) -> Result<Self, EngineError> {
        let mut builder = VocabularyBuilder::default();
        for entry in entries {
            let synonyms: Vec<&str> = entry.synonyms.iter().map(String::as_str).collect();
            builder = builder.skill_with_synonyms(&entry.canonical, &synonyms);
        }
        builder.build()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
        let entries: Vec<VocabEntry> = serde_json::from_str(raw)
            .map_err(|e| EngineError::Vocabulary(format!("invalid vocabulary JSON: {e}")))?;
        Self::from_entries(entries)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Vocabulary(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.canonicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonicals.is_empty()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        let lowered = canonical.to_lowercase();
        self.canonicals.iter().any(|c| *c == lowered)
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.canonicals.iter().map(String::as_str)
    }

    pub(crate) fn canonical(&self, idx: usize) -> &str {
        &self.canonicals[idx]
    }

    pub(crate) fn surface_forms(&self) -> &[SurfaceForm] {
        &self.surface_forms
    }

    /// The built-in skill bank: common languages, frameworks, databases,
    /// infra, and practices, with the synonym table to match.
    pub fn default_bank() -> Self {
        let entries = [
            ("python", &["python3"][..]),
            ("javascript", &["js"]),
            ("typescript", &["ts"]),
            ("java", &[]),
            ("c++", &["cpp"]),
            ("c#", &["c sharp", "csharp"]),
            ("go", &["golang"]),
            ("rust", &[]),
            ("scala", &[]),
            ("kotlin", &[]),
            ("ruby", &[]),
            ("php", &[]),
            ("swift", &[]),
            ("sql", &[]),
            ("html", &[]),
            ("css", &[]),
            ("react", &["reactjs", "react.js"]),
            ("react-native", &["react native", "reactnative"]),
            ("angular", &["angularjs", "angular.js"]),
            ("vue", &["vuejs", "vue.js"]),
            ("svelte", &[]),
            ("nextjs", &["next.js"]),
            ("nodejs", &["node", "node.js"]),
            ("express", &["expressjs", "express.js"]),
            ("django", &[]),
            ("flask", &[]),
            ("fastapi", &[]),
            ("spring", &["spring boot", "springboot"]),
            ("rails", &["ruby on rails"]),
            ("laravel", &[]),
            ("dotnet", &[".net", "dot net", "asp.net"]),
            ("graphql", &[]),
            ("rest", &["restful", "rest api", "rest apis"]),
            ("api", &["apis"]),
            ("microservices", &["micro-services"]),
            ("websockets", &["websocket"]),
            ("postgresql", &["postgres"]),
            ("mysql", &[]),
            ("mongodb", &["mongo"]),
            ("redis", &[]),
            ("elasticsearch", &[]),
            ("cassandra", &[]),
            ("docker", &[]),
            ("kubernetes", &["k8s"]),
            ("terraform", &[]),
            ("ansible", &[]),
            ("jenkins", &[]),
            ("aws", &["amazon web services", "ec2", "eks", "s3", "lambda", "rds"]),
            ("azure", &[]),
            ("gcp", &["google cloud"]),
            ("heroku", &[]),
            ("git", &[]),
            ("github", &[]),
            ("gitlab", &[]),
            ("linux", &[]),
            ("bash", &["shell scripting"]),
            ("nginx", &[]),
            ("kafka", &[]),
            ("rabbitmq", &[]),
            ("ci/cd", &["cicd", "continuous integration", "continuous deployment"]),
            ("devops", &[]),
            ("ml", &["machine learning"]),
            ("ai", &["artificial intelligence"]),
            ("testing", &["unit testing", "integration testing"]),
            ("jest", &[]),
            ("pytest", &[]),
            ("selenium", &[]),
            ("cypress", &[]),
            ("agile", &["scrum"]),
            ("tailwind", &["tailwindcss"]),
            ("bootstrap", &[]),
            ("material-ui", &["material ui", "mui"]),
        ];

        let mut builder = VocabularyBuilder::default();
        for (canonical, synonyms) in entries {
            builder = builder.skill_with_synonyms(canonical, synonyms);
        }
        builder
            .build()
            .expect("built-in skill bank is valid by construction")
    }
}

/// Builder for a `SkillVocabulary`. Validation happens in `build`.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    entries: Vec<(String, Vec<String>)>,
}

impl VocabularyBuilder {
    pub fn skill(self, canonical: &str) -> Self {
        self.skill_with_synonyms(canonical, &[])
    }

    pub fn skill_with_synonyms(mut self, canonical: &str, synonyms: &[&str]) -> Self {
        self.entries.push((
            canonical.to_lowercase(),
            synonyms.iter().map(|s| s.to_lowercase()).collect(),
        ));
        self
    }

    /// Freezes the vocabulary. Rejects empty or duplicate canonical names and
    /// surface forms claimed by two different canonicals.
    pub fn build(self) -> Result<SkillVocabulary, EngineError> {
        let mut canonicals: Vec<String> = Vec::with_capacity(self.entries.len());
        let mut surface_forms: Vec<SurfaceForm> = Vec::new();
        let mut seen_forms: HashSet<String> = HashSet::new();

        for (canonical, synonyms) in self.entries {
            if canonical.trim().is_empty() {
                return Err(EngineError::Vocabulary(
                    "canonical skill name must not be empty".to_string(),
                ));
            }
            if canonicals.contains(&canonical) {
                return Err(EngineError::Vocabulary(format!(
                    "duplicate canonical skill '{canonical}'"
                )));
            }
            let idx = canonicals.len();
            canonicals.push(canonical.clone());

            for form in std::iter::once(canonical).chain(synonyms) {
                let form = form.trim().to_string();
                if form.is_empty() {
                    continue;
                }
                if !seen_forms.insert(form.clone()) {
                    return Err(EngineError::Vocabulary(format!(
                        "surface form '{form}' is mapped to more than one canonical skill"
                    )));
                }
                surface_forms.push(SurfaceForm {
                    text: form,
                    canonical_idx: idx,
                });
            }
        }

        // Longest form first; stable sort keeps insertion order for ties.
        surface_forms.sort_by(|a, b| b.text.len().cmp(&a.text.len()));

        Ok(SkillVocabulary {
            canonicals,
            surface_forms,
        })
    }
}
