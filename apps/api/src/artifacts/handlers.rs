//! Axum route handlers for text artifacts.
//!
//! Validation failures are the only error responses here. Once inputs pass,
//! each handler always answers 200: the completion chain's exhaustion is
//! covered by canned content from [`super::canned`].

use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

use super::canned::{default_analysis, interview_opener, DEFAULT_COVER_LETTER};
use super::prompts::{
    bio_context, response_language, ANALYZE_RESUME_TEMPLATE, COVER_LETTER_TEMPLATE,
    INTERVIEW_PROMPT_TEMPLATE,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
}

/// The analysis is free text on the model path and a structured report on
/// the degraded path, hence the loose `Value`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub analysis: Value,
}

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    pub position: String,
    pub experience_level: String,
    pub resume_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub questions: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserRow>>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let prompt = ANALYZE_RESUME_TEMPLATE
        .replace("{bio_context}", &bio_context(&user.bio))
        .replace("{resume_text}", &request.resume_text);

    let analysis = match state.completions.complete(&prompt).await {
        Some(text) => Value::String(text),
        None => {
            warn!("resume analysis degraded to canned report");
            default_analysis()
        }
    };

    Ok(Json(AnalyzeResumeResponse { analysis }))
}

/// POST /generate-interview-questions and POST /generate-voice-interview
///
/// Both routes share this handler; voice clients render the same text
/// through speech synthesis.
pub async fn handle_interview_question(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserRow>>,
    Json(request): Json<InterviewRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    if request.position.trim().is_empty() {
        return Err(AppError::Validation("position cannot be empty".to_string()));
    }

    let supplied = request.resume_context.as_deref().unwrap_or("");
    let mut resume_context = format!("{}{}", bio_context(&user.bio), supplied);
    // Extract any language directive before the context gets defaulted.
    let language = response_language(&resume_context).to_string();
    if resume_context.trim().is_empty() {
        resume_context = "Not provided".to_string();
    }

    let prompt = INTERVIEW_PROMPT_TEMPLATE
        .replace("{position}", &request.position)
        .replace("{experience_level}", &request.experience_level)
        .replace("{resume_context}", &resume_context)
        .replace("{language}", &language);

    let questions = match state.completions.complete(&prompt).await {
        Some(text) => text,
        None => {
            warn!("interview generation degraded to canned opener");
            interview_opener(&request.position)
        }
    };

    Ok(Json(InterviewResponse { questions }))
}

/// POST /generate-cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserRow>>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let prompt = COVER_LETTER_TEMPLATE
        .replace("{bio_context}", &bio_context(&user.bio))
        .replace("{resume_text}", &request.resume_text)
        .replace("{job_description}", &request.job_description);

    let cover_letter = match state.completions.complete(&prompt).await {
        Some(text) => text,
        None => {
            warn!("cover letter generation degraded to canned letter");
            DEFAULT_COVER_LETTER.to_string()
        }
    };

    Ok(Json(CoverLetterResponse { cover_letter }))
}
