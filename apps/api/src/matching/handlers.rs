//! Axum route handler for job matching.

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::models::user::UserRow;
use crate::state::AppState;

use super::pipeline::{run_match, MatchJobsRequest, MatchJobsResponse};

/// POST /match-jobs
///
/// Runs the full match pipeline for the authenticated user. Infallible:
/// upstream outages surface as degraded matches, never as an error status.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserRow>>,
    Json(request): Json<MatchJobsRequest>,
) -> Json<MatchJobsResponse> {
    let response = run_match(
        state.jobs.as_ref(),
        &state.completions,
        state.audit.as_ref(),
        user.id,
        &request,
    )
    .await;

    Json(response)
}
