use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::progress::jobs::{CancelRejection, JobResult, ProgressSnapshot};
use crate::state::AppState;

/// GET /api/v1/analyze/:id/progress
///
/// The displayed state the page polls while the overlay is up. Purely
/// cosmetic; never consulted for control decisions.
pub async fn handle_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressSnapshot>, AppError> {
    state
        .jobs
        .snapshot(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis job {id} not found")))
}

/// POST /api/v1/analyze/:id/cancel
///
/// Clears both timers of a running flow. Rejected once the real submission
/// has fired: submission happens at most once and cannot be undone.
pub async fn handle_cancel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    match state.jobs.cancel(id) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(CancelRejection::NotFound) => {
            Err(AppError::NotFound(format!("Analysis job {id} not found")))
        }
        Err(CancelRejection::TooLate) => Err(AppError::Conflict(
            "Analysis already submitted; it can no longer be cancelled".to_string(),
        )),
    }
}

/// GET /api/v1/analyze/:id/result
///
/// The upstream results page, verbatim, once the real submission completed.
pub async fn handle_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let result = state
        .jobs
        .result(id)
        .ok_or_else(|| AppError::NotFound(format!("Analysis job {id} not found")))?;

    match result {
        JobResult::Ready(outcome) => Ok(Html(outcome.body)),
        JobResult::Pending => Err(AppError::Conflict(
            "Analysis results are not available yet".to_string(),
        )),
        JobResult::Cancelled => Err(AppError::Conflict(
            "Analysis was cancelled before submission".to_string(),
        )),
        JobResult::Failed(msg) => Err(AppError::Upstream(msg)),
    }
}
