//! Skill Classifier — partitions a job vocabulary into matched, missing and required skills.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// How many leading vocabulary entries count as a job's must-haves.
///
/// Job postings are assumed to list must-haves first. Revisit once real
/// postings carry an explicit required/optional marker.
pub const REQUIRED_SKILL_COUNT: usize = 4;

/// Display status for a single vocabulary skill.
/// A matched skill is always `Matched`, even when it is also required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    Matched,
    Required,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub status: SkillStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillClassification {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Informational label; does not affect matched/missing membership.
    pub required: Vec<String>,
    pub skill_matches: Vec<SkillMatch>,
}

/// Classifies `vocabulary` against the skills extracted from a resume.
///
/// `matched` is `extracted` as given, `missing` is the vocabulary minus
/// `extracted` in vocabulary order, and `required` is the first
/// `required_count` vocabulary entries.
pub fn classify_skills(
    vocabulary: &[String],
    extracted: &[String],
    required_count: usize,
) -> SkillClassification {
    let extracted_set: HashSet<&str> = extracted.iter().map(String::as_str).collect();

    let missing: Vec<String> = vocabulary
        .iter()
        .filter(|skill| !extracted_set.contains(skill.as_str()))
        .cloned()
        .collect();

    let required: Vec<String> = vocabulary.iter().take(required_count).cloned().collect();
    let required_set: HashSet<&str> = required.iter().map(String::as_str).collect();

    let skill_matches = vocabulary
        .iter()
        .map(|skill| {
            let status = if extracted_set.contains(skill.as_str()) {
                SkillStatus::Matched
            } else if required_set.contains(skill.as_str()) {
                SkillStatus::Required
            } else {
                SkillStatus::Missing
            };
            SkillMatch {
                skill: skill.clone(),
                status,
            }
        })
        .collect();

    SkillClassification {
        matched: extracted.to_vec(),
        missing,
        required,
        skill_matches,
    }
}
