use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::analysis::pipeline::AnalysisResult;
use crate::submissions::identity::{legacy_submission_id, submission_id};

/// One analysed resume submission. Written once to the submission log, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Content hash of (job_description, created_at).
    pub id: String,
    /// Truncated base64 id issued by earlier clients; may collide.
    pub legacy_id: String,
    pub job_id: Option<String>,
    pub job_description: String,
    pub resume_text: String,
    pub analysis_result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Builds a record and derives both identifiers. `created_at` is cut to
    /// millisecond precision so the ISO-8601 form used for identity survives
    /// a storage round-trip.
    pub fn new(
        job_id: Option<String>,
        job_description: String,
        resume_text: String,
        analysis_result: AnalysisResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        let created_at = created_at.trunc_subsecs(3);
        let stamp = iso_timestamp(&created_at);
        Self {
            id: submission_id(&job_description, &stamp),
            legacy_id: legacy_submission_id(&job_description, &stamp),
            job_id,
            job_description,
            resume_text,
            analysis_result,
            created_at,
        }
    }

    pub fn matches_id(&self, id: &str) -> bool {
        self.id == id || self.legacy_id == id
    }
}

/// `2025-04-02T10:15:00.000Z`
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Submission as exposed to dashboard and detail views (no resume text).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionView {
    pub id: String,
    pub legacy_id: String,
    pub job_id: Option<String>,
    pub job_description: String,
    pub analysis_result: AnalysisResult,
    pub created_at: String,
}

impl From<&SubmissionRecord> for SubmissionView {
    fn from(record: &SubmissionRecord) -> Self {
        Self {
            id: record.id.clone(),
            legacy_id: record.legacy_id.clone(),
            job_id: record.job_id.clone(),
            job_description: record.job_description.clone(),
            analysis_result: record.analysis_result.clone(),
            created_at: iso_timestamp(&record.created_at),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SubmissionRow {
    pub id: String,
    pub legacy_id: String,
    pub job_id: Option<String>,
    pub job_description: String,
    pub resume_text: String,
    pub analysis_result: Json<AnalysisResult>,
    pub created_at: DateTime<Utc>,
}

impl From<SubmissionRow> for SubmissionRecord {
    fn from(row: SubmissionRow) -> Self {
        Self {
            id: row.id,
            legacy_id: row.legacy_id,
            job_id: row.job_id,
            job_description: row.job_description,
            resume_text: row.resume_text,
            analysis_result: row.analysis_result.0,
            created_at: row.created_at,
        }
    }
}
