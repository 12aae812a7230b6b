pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::artifacts::handlers as artifact_handlers;
use crate::auth::handlers as auth_handlers;
use crate::auth::middleware::authenticate;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Waypoint API is running" }))
}

pub fn build_router(state: AppState) -> Router {
    // Every route below the guard sees the resolved user in extensions.
    let protected = Router::new()
        .route("/me", get(auth_handlers::handle_me))
        .route("/update-profile", post(auth_handlers::handle_update_profile))
        .route(
            "/analyze-resume",
            post(artifact_handlers::handle_analyze_resume),
        )
        .route(
            "/generate-interview-questions",
            post(artifact_handlers::handle_interview_question),
        )
        // Same handler as text interviews; clients speak the result.
        .route(
            "/generate-voice-interview",
            post(artifact_handlers::handle_interview_question),
        )
        .route(
            "/generate-cover-letter",
            post(artifact_handlers::handle_cover_letter),
        )
        .route("/match-jobs", post(matching_handlers::handle_match_jobs))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route("/register", post(auth_handlers::handle_register))
        .route("/login", post(auth_handlers::handle_login))
        .merge(protected)
        .with_state(state)
}
