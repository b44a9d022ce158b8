//! Skill extractor — turns a free-text job description into the ordered set
//! of canonical skills it mentions.
//!
//! Matching is case-insensitive and whole-word only: "java" never matches
//! inside "javascript". Surface forms are tried longest first with span
//! claiming, so "React Native" yields `react-native` and the shorter "react"
//! synonym cannot also fire on the same characters. Each canonical appears at
//! most once, ordered by the position of its first match in the text.

use std::sync::Arc;

use tracing::debug;

use crate::scoring::vocabulary::SkillVocabulary;

pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
}

impl SkillExtractor {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Extracts canonical skills from a description.
    ///
    /// Empty or whitespace-only input yields an empty result, not an error.
    /// The output is always a subset of the vocabulary's canonical names.
    pub fn extract(&self, description: &str) -> Vec<String> {
        if description.trim().is_empty() {
            return Vec::new();
        }

        let lowered = description.to_lowercase();
        let mut claimed: Vec<(usize, usize)> = Vec::new();
        // canonical_idx → byte position of its first match
        let mut first_match: Vec<Option<usize>> = vec![None; self.vocabulary.len()];

        for form in self.vocabulary.surface_forms() {
            for (start, matched) in lowered.match_indices(&form.text) {
                let end = start + matched.len();
                if !is_whole_word(&lowered, start, end) {
                    continue;
                }
                if overlaps_claimed(&claimed, start, end) {
                    continue;
                }
                claimed.push((start, end));
                let slot = &mut first_match[form.canonical_idx];
                if slot.map_or(true, |pos| start < pos) {
                    *slot = Some(start);
                }
            }
        }

        let mut hits: Vec<(usize, usize)> = first_match
            .iter()
            .enumerate()
            .filter_map(|(idx, pos)| pos.map(|p| (p, idx)))
            .collect();
        hits.sort();

        let skills: Vec<String> = hits
            .into_iter()
            .map(|(_, idx)| self.vocabulary.canonical(idx).to_string())
            .collect();

        debug!(
            "Extracted {} skills from description ({} chars)",
            skills.len(),
            description.len()
        );
        skills
    }
}

/// Whole-word check: the characters adjacent to the match must not be
/// alphanumeric. This handles forms with non-word edges (`c++`, `.net`,
/// `ci/cd`) uniformly, where regex `\b` anchors would misfire.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

fn overlaps_claimed(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}
