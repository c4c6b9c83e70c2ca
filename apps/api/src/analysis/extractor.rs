//! Skill Extractor — finds which vocabulary skills a resume mentions.

/// Returns the vocabulary entries that occur in `resume_text`, in vocabulary order.
///
/// Matching is case-insensitive substring containment with no word-boundary
/// check, so "Git" matches "Digital". Dashboard counts rely on this exact rule.
pub fn extract_skills(resume_text: &str, vocabulary: &[String]) -> Vec<String> {
    let text_lower = resume_text.to_lowercase();
    vocabulary
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}
