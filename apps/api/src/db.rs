use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS job_postings (
        id           TEXT PRIMARY KEY,
        title        TEXT NOT NULL,
        company      TEXT NOT NULL,
        location     TEXT,
        description  TEXT NOT NULL,
        requirements TEXT[] NOT NULL DEFAULT '{}',
        skills       TEXT[] NOT NULL,
        post_date    DATE,
        created_at   TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS submissions (
        seq             BIGSERIAL PRIMARY KEY,
        id              TEXT NOT NULL UNIQUE,
        legacy_id       TEXT NOT NULL,
        job_id          TEXT,
        job_description TEXT NOT NULL,
        resume_text     TEXT NOT NULL,
        analysis_result JSONB NOT NULL,
        created_at      TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS submissions_legacy_id_idx ON submissions (legacy_id)",
];

/// Creates the job and submission tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
