//! Analysis pipeline: extract → classify → score → suggest.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::classifier::{classify_skills, SkillMatch, REQUIRED_SKILL_COUNT};
use crate::analysis::errors::AnalysisError;
use crate::analysis::extractor::extract_skills;
use crate::analysis::scorer::{score, JitterSource};
use crate::analysis::suggestions::generate_suggestions;

/// Compatibility report for one resume against one job vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub extracted_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub skill_matches: Vec<SkillMatch>,
    pub match_score: u32, // 0 – 100
    pub ats_score: u32,   // 0 – 100
    pub feedback: Vec<String>,
}

/// Runs the full matching pipeline for `resume_text` against `vocabulary`.
///
/// Blank resume text and an empty vocabulary are rejected as `InvalidInput`;
/// neither is turned into a zero score.
pub fn analyze_resume(
    resume_text: &str,
    vocabulary: &[String],
    jitter: &dyn JitterSource,
) -> Result<AnalysisResult, AnalysisError> {
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if vocabulary.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "job has no skills to score against".to_string(),
        ));
    }

    let extracted = extract_skills(resume_text, vocabulary);
    let classification = classify_skills(vocabulary, &extracted, REQUIRED_SKILL_COUNT);
    let scores = score(&classification.matched, vocabulary, jitter)?;
    let feedback = generate_suggestions(&classification.missing, scores.ats_score);

    debug!(
        "Analysis: {}/{} skills matched, match={} ats={}",
        classification.matched.len(),
        vocabulary.len(),
        scores.match_score,
        scores.ats_score
    );

    Ok(AnalysisResult {
        extracted_skills: extracted,
        required_skills: classification.required,
        matched_skills: classification.matched,
        missing_skills: classification.missing,
        skill_matches: classification.skill_matches,
        match_score: scores.match_score,
        ats_score: scores.ats_score,
        feedback,
    })
}
