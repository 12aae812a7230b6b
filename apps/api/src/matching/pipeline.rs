//! End-to-end match pipeline: aggregate candidates, rank them, audit the
//! model-ranked runs.
//!
//! The pipeline is infallible by construction. Both stages absorb their own
//! failures (empty pool, degraded ranking) and auditing is best effort, so
//! every call produces a well-formed response.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::completion::CompletionChain;
use crate::jobs::aggregator::aggregate;
use crate::jobs::source::JobSource;
use crate::models::job::RankedJob;
use crate::models::search::NewSearchRecord;

use super::audit::AuditSink;
use super::ranker::{rank, RankSource};

/// Searched when the user's own interests produce no candidates at all.
pub const FALLBACK_SEARCH_TERM: &str = "Software Engineer Intern";

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub profile: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchJobsResponse {
    pub matches: Vec<RankedJob>,
}

/// Runs the full pipeline for one authenticated user.
pub async fn run_match(
    jobs: &dyn JobSource,
    chain: &CompletionChain,
    audit: &dyn AuditSink,
    user_id: Uuid,
    request: &MatchJobsRequest,
) -> MatchJobsResponse {
    let pool = aggregate(jobs, &request.interests, FALLBACK_SEARCH_TERM).await;
    info!(
        "aggregated {} candidate jobs for {} interest terms",
        pool.len(),
        request.interests.len()
    );

    let outcome = rank(chain, &request.profile, &request.interests, &pool).await;
    info!(
        "ranked {} matches via {:?} path",
        outcome.matches.len(),
        outcome.source
    );

    if outcome.source == RankSource::Model {
        let record = NewSearchRecord {
            user_id,
            profile: request.profile.clone(),
            interests: request.interests.clone(),
            result_count: outcome.matches.len() as i32,
        };
        if let Err(e) = audit.record(record).await {
            warn!("failed to record search audit entry: {e}");
        }
    }

    MatchJobsResponse {
        matches: outcome.matches,
    }
}
