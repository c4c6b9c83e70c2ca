//! Axum route handlers for the HR dashboard.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::dashboard::aggregator::{aggregate, DashboardStats};
use crate::dashboard::candidates::{list_candidates, CandidateFilter};
use crate::errors::AppError;
use crate::models::submission::SubmissionView;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub recent_submissions: Vec<SubmissionView>,
    pub stats: DashboardStats,
}

/// GET /api/v1/dashboard/stats
///
/// Stats cover the whole submission history; `recent_submissions` is the
/// newest slice of it, newest first.
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let snapshot = state.submissions.snapshot().await?;
    let stats = aggregate(snapshot.iter().map(|s| &s.analysis_result));

    let recent_submissions = snapshot
        .iter()
        .rev()
        .take(state.config.recent_submissions_limit)
        .map(SubmissionView::from)
        .collect();

    Ok(Json(DashboardResponse {
        recent_submissions,
        stats,
    }))
}

/// GET /api/v1/hr/candidates?job_id=&min_score=&max_score=
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(filter): Query<CandidateFilter>,
) -> Result<Json<Vec<SubmissionView>>, AppError> {
    let snapshot = state.submissions.snapshot().await?;
    let candidates = list_candidates(&snapshot, &filter)
        .into_iter()
        .map(SubmissionView::from)
        .collect();
    Ok(Json(candidates))
}
