//! Job Catalog — read and author job postings.
//!
//! `AppState` holds an `Arc<dyn JobCatalog>`: in-memory by default,
//! PostgreSQL when `DATABASE_URL` is set. Postings are never updated.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, NewJobPosting};

#[async_trait]
pub trait JobCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<JobPosting>, AppError>;

    async fn get(&self, id: &str) -> Result<Option<JobPosting>, AppError>;

    /// Posting whose description equals `description` after trimming both sides.
    async fn find_by_description(&self, description: &str)
        -> Result<Option<JobPosting>, AppError>;

    /// Validates and stores a new posting under a fresh id.
    async fn create(&self, new_job: NewJobPosting) -> Result<JobPosting, AppError>;
}

fn new_posting(new_job: NewJobPosting) -> Result<JobPosting, AppError> {
    let new_job = new_job.validate()?;
    Ok(new_job.into_posting(Uuid::new_v4().to_string(), Utc::now().date_naive()))
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryJobCatalog {
    jobs: RwLock<Vec<JobPosting>>,
}

impl InMemoryJobCatalog {
    pub fn new(seed: Vec<JobPosting>) -> Self {
        Self {
            jobs: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl JobCatalog for InMemoryJobCatalog {
    async fn list(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.jobs.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<JobPosting>, AppError> {
        Ok(self.jobs.read().await.iter().find(|j| j.id == id).cloned())
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Option<JobPosting>, AppError> {
        let needle = description.trim();
        Ok(self
            .jobs
            .read()
            .await
            .iter()
            .find(|j| j.description.trim() == needle)
            .cloned())
    }

    async fn create(&self, new_job: NewJobPosting) -> Result<JobPosting, AppError> {
        let posting = new_posting(new_job)?;
        self.jobs.write().await.push(posting.clone());
        info!("Created job posting {} ({})", posting.id, posting.title);
        Ok(posting)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL catalog
// ────────────────────────────────────────────────────────────────────────────

pub struct PgJobCatalog {
    pool: PgPool,
}

const JOB_COLUMNS: &str =
    "id, title, company, location, description, requirements, skills, post_date";

impl PgJobCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts `jobs` that are not already present. Existing ids are left untouched.
    pub async fn seed(&self, jobs: &[JobPosting]) -> Result<(), AppError> {
        for job in jobs {
            self.insert(job).await?;
        }
        info!("Seeded {} default job postings", jobs.len());
        Ok(())
    }

    async fn insert(&self, job: &JobPosting) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO job_postings
                (id, title, company, location, description, requirements, skills, post_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&job.id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.skills)
        .bind(job.post_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl JobCatalog for PgJobCatalog {
    async fn list(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM job_postings ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, id: &str) -> Result<Option<JobPosting>, AppError> {
        Ok(sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM job_postings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Option<JobPosting>, AppError> {
        Ok(sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM job_postings WHERE btrim(description) = $1 \
             ORDER BY created_at ASC LIMIT 1"
        ))
        .bind(description.trim())
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn create(&self, new_job: NewJobPosting) -> Result<JobPosting, AppError> {
        let posting = new_posting(new_job)?;
        self.insert(&posting).await?;
        info!("Created job posting {} ({})", posting.id, posting.title);
        Ok(posting)
    }
}
