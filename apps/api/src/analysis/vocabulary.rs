//! Skill Vocabulary — the ordered skill list a resume is scored against, and
//! its resolution from an analyze request.

use crate::analysis::errors::AnalysisError;
use crate::errors::AppError;
use crate::jobs::catalog::JobCatalog;

/// Ordered, trimmed, non-blank skills. Order is significant: the leading
/// entries are a job's required skills.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillVocabulary(Vec<String>);

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            skills
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn skills(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Where the vocabulary for an analysis came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVocabulary {
    pub vocabulary: SkillVocabulary,
    pub job_id: Option<String>,
    /// Catalog description of the resolved job, if one was found.
    pub catalog_description: Option<String>,
}

/// Resolves the vocabulary for an analysis, first match wins:
/// 1. explicit non-blank `skills`
/// 2. catalog posting `job_id`
/// 3. catalog posting whose description equals `job_description`
///
/// A `job_id` that is not in the catalog is invalid input on every path,
/// including when explicit skills are given.
pub async fn resolve_vocabulary(
    catalog: &dyn JobCatalog,
    job_id: Option<&str>,
    job_description: &str,
    explicit_skills: Option<&[String]>,
) -> Result<ResolvedVocabulary, AppError> {
    let job = match job_id {
        Some(id) => Some(catalog.get(id).await?.ok_or_else(|| {
            AnalysisError::InvalidInput(format!("unknown job id '{id}'"))
        })?),
        None => None,
    };

    if let Some(skills) = explicit_skills {
        let vocabulary = SkillVocabulary::new(skills);
        if !vocabulary.is_empty() {
            return Ok(ResolvedVocabulary {
                vocabulary,
                job_id: job.as_ref().map(|j| j.id.clone()),
                catalog_description: job.map(|j| j.description),
            });
        }
    }

    let job = match job {
        Some(job) => Some(job),
        None if !job_description.trim().is_empty() => {
            catalog.find_by_description(job_description).await?
        }
        None => None,
    };

    match job {
        Some(job) => Ok(ResolvedVocabulary {
            vocabulary: SkillVocabulary::new(&job.skills),
            job_id: Some(job.id),
            catalog_description: Some(job.description),
        }),
        None => Err(AnalysisError::InvalidInput(
            "no skill vocabulary for this job; provide job_id or skills".to_string(),
        )
        .into()),
    }
}
