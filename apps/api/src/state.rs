use std::sync::Arc;

use crate::analysis::scorer::JitterSource;
use crate::config::Config;
use crate::jobs::catalog::JobCatalog;
use crate::submissions::store::SubmissionLog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub jobs: Arc<dyn JobCatalog>,
    /// Append-only submission history consumed by the dashboard.
    pub submissions: Arc<dyn SubmissionLog>,
    /// ATS jitter. Default: UniformJitter; SeededJitter when ATS_JITTER_SEED is set.
    pub jitter: Arc<dyn JitterSource>,
}
