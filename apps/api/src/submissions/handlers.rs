use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::submission::SubmissionView;
use crate::state::AppState;

/// GET /api/v1/submissions/:id
///
/// Accepts the content id or the legacy 12-character id.
pub async fn handle_get_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SubmissionView>, AppError> {
    let record = state
        .submissions
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Submission {id} not found")))?;
    Ok(Json(SubmissionView::from(&record)))
}
