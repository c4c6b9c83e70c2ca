//! Submission Log — append-only storage of analysed submissions.
//!
//! Consumers only ever append or read a snapshot; there is no update or
//! delete path. `AppState` holds an `Arc<dyn SubmissionLog>`: in-memory by
//! default, PostgreSQL when `DATABASE_URL` is set.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::models::submission::{SubmissionRecord, SubmissionRow};

#[async_trait]
pub trait SubmissionLog: Send + Sync {
    /// Appends `record`. Returns `false` when a record with the same content
    /// id already exists; the log is left unchanged in that case.
    async fn append(&self, record: SubmissionRecord) -> Result<bool, AppError>;

    /// All records in append order. May miss appends that are in flight.
    async fn snapshot(&self) -> Result<Vec<SubmissionRecord>, AppError>;

    /// First record (in append order) whose content id or legacy id is `id`.
    async fn find(&self, id: &str) -> Result<Option<SubmissionRecord>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory log
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemorySubmissionLog {
    records: RwLock<Vec<SubmissionRecord>>,
}

#[async_trait]
impl SubmissionLog for InMemorySubmissionLog {
    async fn append(&self, record: SubmissionRecord) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Ok(false);
        }
        records.push(record);
        Ok(true)
    }

    async fn snapshot(&self) -> Result<Vec<SubmissionRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<SubmissionRecord>, AppError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.matches_id(id))
            .cloned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL log
// ────────────────────────────────────────────────────────────────────────────

pub struct PgSubmissionLog {
    pool: PgPool,
}

impl PgSubmissionLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionLog for PgSubmissionLog {
    async fn append(&self, record: SubmissionRecord) -> Result<bool, AppError> {
        // Append-only: INSERT, never UPDATE
        let result = sqlx::query(
            r#"
            INSERT INTO submissions
                (id, legacy_id, job_id, job_description, resume_text, analysis_result, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&record.id)
        .bind(&record.legacy_id)
        .bind(&record.job_id)
        .bind(&record.job_description)
        .bind(&record.resume_text)
        .bind(Json(&record.analysis_result))
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        let inserted = result.rows_affected() == 1;
        if inserted {
            info!("Appended submission {}", record.id);
        }
        Ok(inserted)
    }

    async fn snapshot(&self) -> Result<Vec<SubmissionRecord>, AppError> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT id, legacy_id, job_id, job_description, resume_text, analysis_result, created_at
            FROM submissions
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(SubmissionRecord::from).collect())
    }

    async fn find(&self, id: &str) -> Result<Option<SubmissionRecord>, AppError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT id, legacy_id, job_id, job_description, resume_text, analysis_result, created_at
            FROM submissions
            WHERE id = $1 OR legacy_id = $1
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(SubmissionRecord::from))
    }
}
