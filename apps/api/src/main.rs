mod analysis;
mod config;
mod dashboard;
mod db;
mod errors;
mod jobs;
mod models;
mod routes;
mod state;
mod submissions;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::scorer::{JitterSource, SeededJitter, UniformJitter};
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::jobs::catalog::{InMemoryJobCatalog, JobCatalog, PgJobCatalog};
use crate::jobs::seed::default_job_postings;
use crate::routes::build_router;
use crate::state::AppState;
use crate::submissions::store::{InMemorySubmissionLog, PgSubmissionLog, SubmissionLog};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Screener API v{}", env!("CARGO_PKG_VERSION"));

    let (jobs, submissions) = build_storage(&config).await?;

    let jitter: Arc<dyn JitterSource> = match config.ats_jitter_seed {
        Some(seed) => {
            info!("ATS jitter seeded with {seed}");
            Arc::new(SeededJitter::new(seed))
        }
        None => Arc::new(UniformJitter),
    };

    let state = AppState {
        config: config.clone(),
        jobs,
        submissions,
        jitter,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// PostgreSQL-backed catalog and log when `DATABASE_URL` is set, in-memory otherwise.
async fn build_storage(config: &Config) -> Result<(Arc<dyn JobCatalog>, Arc<dyn SubmissionLog>)> {
    let seed = if config.seed_default_jobs {
        default_job_postings()
    } else {
        Vec::new()
    };

    match &config.database_url {
        Some(url) => {
            let db = create_pool(url).await?;
            ensure_schema(&db).await?;

            let jobs = PgJobCatalog::new(db.clone());
            jobs.seed(&seed).await?;

            Ok((Arc::new(jobs), Arc::new(PgSubmissionLog::new(db))))
        }
        None => {
            info!("DATABASE_URL not set; submissions are kept in memory only");
            Ok((
                Arc::new(InMemoryJobCatalog::new(seed)),
                Arc::new(InMemorySubmissionLog::default()),
            ))
        }
    }
}
