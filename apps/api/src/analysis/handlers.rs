//! Axum route handlers for the Analysis API.

use anyhow::anyhow;
use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::pipeline::{analyze_resume, AnalysisResult};
use crate::analysis::vocabulary::resolve_vocabulary;
use crate::errors::AppError;
use crate::models::submission::SubmissionRecord;
use crate::state::AppState;

const MAX_APPEND_ATTEMPTS: usize = 16;

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub job_description: String,
    pub resume_text: String,
    #[serde(default)]
    pub job_id: Option<String>,
    /// Explicit vocabulary; overrides the catalog when non-empty.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub submission_id: String,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// POST /api/v1/analyze-resume
///
/// Resolves the job vocabulary, runs the matching pipeline, and appends the
/// submission to the log.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let resolved = resolve_vocabulary(
        state.jobs.as_ref(),
        request.job_id.as_deref(),
        &request.job_description,
        request.skills.as_deref(),
    )
    .await?;

    let analysis = analyze_resume(
        &request.resume_text,
        resolved.vocabulary.skills(),
        state.jitter.as_ref(),
    )?;

    let job_description = if request.job_description.trim().is_empty() {
        resolved.catalog_description.unwrap_or_default()
    } else {
        request.job_description
    };

    let record = append_submission(
        &state,
        resolved.job_id,
        job_description,
        request.resume_text,
        &analysis,
    )
    .await?;
    let job_id = record.job_id.as_deref().unwrap_or("-");

    info!(
        "Analyzed submission {} for job {job_id}: match={} ats={} missing={}",
        record.id,
        analysis.match_score,
        analysis.ats_score,
        analysis.missing_skills.len()
    );

    Ok(Json(AnalyzeResumeResponse {
        submission_id: record.id,
        analysis,
    }))
}

/// Appends a new submission. Identity is derived from (job_description,
/// created_at), so two submissions for the same job in the same millisecond
/// would share an id; the later one is moved forward by a millisecond.
async fn append_submission(
    state: &AppState,
    job_id: Option<String>,
    job_description: String,
    resume_text: String,
    analysis: &AnalysisResult,
) -> Result<SubmissionRecord, AppError> {
    let mut created_at = Utc::now();
    for _ in 0..MAX_APPEND_ATTEMPTS {
        let record = SubmissionRecord::new(
            job_id.clone(),
            job_description.clone(),
            resume_text.clone(),
            analysis.clone(),
            created_at,
        );
        if state.submissions.append(record.clone()).await? {
            return Ok(record);
        }
        debug!("Submission id {} taken; retrying one millisecond later", record.id);
        created_at = record.created_at + Duration::milliseconds(1);
    }
    Err(AppError::Internal(anyhow!(
        "could not allocate a unique submission id after {MAX_APPEND_ATTEMPTS} attempts"
    )))
}
