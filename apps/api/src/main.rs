mod artifacts;
mod auth;
mod completion;
mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completion::gemini::GeminiClient;
use crate::completion::{CompletionChain, Provider};
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::jobs::source::{JSearchClient, JobSource, UnconfiguredSource};
use crate::matching::audit::PgAuditSink;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Waypoint API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize the completion provider chain
    let completions = Arc::new(build_completion_chain(&config));
    info!("completion chain ready ({} providers)", completions.len());

    // Initialize the job listing source
    let jobs = build_job_source(&config);

    // Initialize the search audit sink
    let audit = Arc::new(PgAuditSink::new(db.clone()));

    // Build app state
    let state = AppState {
        db,
        completions,
        jobs,
        audit,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the provider chain from config, one entry per model name in
/// priority order. Without an API key the chain is empty and every consumer
/// runs degraded.
fn build_completion_chain(config: &Config) -> CompletionChain {
    let Some(api_key) = &config.gemini_api_key else {
        warn!("GEMINI_API_KEY not set; completion chain is empty, responses will be degraded");
        return CompletionChain::new(Vec::new());
    };

    let providers = config
        .gemini_models
        .iter()
        .map(|model| Provider {
            name: model.clone(),
            client: Arc::new(GeminiClient::new(api_key.clone(), model.clone())),
        })
        .collect();
    let chain = CompletionChain::new(providers);
    if chain.is_empty() {
        warn!("GEMINI_MODELS parsed to an empty list; completion chain has no providers");
    }
    chain
}

/// Binds the configured job source, or a stand-in whose failures the
/// aggregator absorbs as empty pools.
fn build_job_source(config: &Config) -> Arc<dyn JobSource> {
    match &config.jsearch_api_key {
        Some(api_key) => {
            info!("job source ready (country: {})", config.jsearch_country);
            Arc::new(JSearchClient::new(
                api_key.clone(),
                config.jsearch_country.clone(),
            ))
        }
        None => {
            warn!("JSEARCH_API_KEY not set; job searches will return no candidates");
            Arc::new(UnconfiguredSource)
        }
    }
}
