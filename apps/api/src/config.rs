use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparsable values.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL backends when set, in-memory storage otherwise.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub ats_jitter_seed: Option<u64>,
    pub recent_submissions_limit: usize,
    pub seed_default_jobs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ats_jitter_seed: optional_env("ATS_JITTER_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("ATS_JITTER_SEED must be an unsigned integer")?,
            recent_submissions_limit: parse_env("RECENT_SUBMISSIONS_LIMIT", 10)
                .context("RECENT_SUBMISSIONS_LIMIT must be a non-negative integer")?,
            seed_default_jobs: parse_env("SEED_DEFAULT_JOBS", true)
                .context("SEED_DEFAULT_JOBS must be true or false")?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for '{key}': {raw}")),
        None => Ok(default),
    }
}
