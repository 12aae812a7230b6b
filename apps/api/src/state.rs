use std::sync::Arc;

use sqlx::PgPool;

use crate::completion::CompletionChain;
use crate::config::Config;
use crate::jobs::source::JobSource;
use crate::matching::audit::AuditSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Provider fallback chain. Empty when no completion key is configured;
    /// callers then run on their degraded paths.
    pub completions: Arc<CompletionChain>,
    /// Job listing source. Bound to an always-failing stand-in when no
    /// search key is configured.
    pub jobs: Arc<dyn JobSource>,
    /// Search audit sink. Written on model-ranked runs only, best effort.
    pub audit: Arc<dyn AuditSink>,
    pub config: Config,
}
