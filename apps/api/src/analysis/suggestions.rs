//! Suggestion Generator — turns missing skills and a weak ATS score into advice.

/// ATS scores below this add the generic formatting suggestions.
pub const ATS_SUGGESTION_THRESHOLD: u32 = 90;

pub const KEYWORD_DENSITY_SUGGESTION: &str =
    "Use more keywords from the job description to improve ATS score";
pub const SECTION_STRUCTURE_SUGGESTION: &str =
    "Structure your resume with clear sections for better parsing";

/// One suggestion per missing skill, in order, then the two generic ATS
/// suggestions when `ats_score < ATS_SUGGESTION_THRESHOLD`.
pub fn generate_suggestions(missing_skills: &[String], ats_score: u32) -> Vec<String> {
    let mut suggestions: Vec<String> = missing_skills
        .iter()
        .map(|skill| {
            format!("Consider adding '{skill}' to your resume and highlighting relevant experience")
        })
        .collect();

    if ats_score < ATS_SUGGESTION_THRESHOLD {
        suggestions.push(KEYWORD_DENSITY_SUGGESTION.to_string());
        suggestions.push(SECTION_STRUCTURE_SUGGESTION.to_string());
    }

    suggestions
}
