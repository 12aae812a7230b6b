//! Model-backed candidate ranking with a deterministic degraded path.
//!
//! The ranker asks the completion chain to select and order the best jobs
//! from the aggregated pool. The model's output is held to a strict
//! contract: a bare JSON array of fully-populated match objects, each with a
//! usable title and link. Anything else, including chain exhaustion, routes
//! to the degraded path, which hands back the head of the raw pool. The
//! caller always receives a usable `RankOutcome`.

use tracing::warn;

use crate::completion::CompletionChain;
use crate::models::job::{CandidateJob, RankedJob};

use super::prompts::RANK_PROMPT_TEMPLATE;

/// Matches returned on the degraded path. The model path is asked for the
/// same count but its output is passed through uncapped.
pub const MAX_MATCHES: usize = 5;

/// Which path produced the matches. Auditing only records model-ranked runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankSource {
    Model,
    Degraded,
}

/// Result of one ranking pass.
#[derive(Debug)]
pub struct RankOutcome {
    pub matches: Vec<RankedJob>,
    pub source: RankSource,
}

/// Ranks the candidate pool for one profile.
///
/// Infallible: every failure mode inside (chain exhaustion, unparseable
/// output, contract violations) degrades to the pool head instead of
/// surfacing an error.
pub async fn rank(
    chain: &CompletionChain,
    profile: &str,
    interests: &[String],
    pool: &[CandidateJob],
) -> RankOutcome {
    let prompt = build_rank_prompt(profile, interests, pool);

    let Some(completion) = chain.complete(&prompt).await else {
        warn!("completion chain exhausted, falling back to unranked matches");
        return RankOutcome {
            matches: degraded(pool),
            source: RankSource::Degraded,
        };
    };

    match decode_matches(&completion) {
        Some(matches) => RankOutcome {
            matches,
            source: RankSource::Model,
        },
        None => {
            warn!("ranking output violated the match contract, falling back to unranked matches");
            RankOutcome {
                matches: degraded(pool),
                source: RankSource::Degraded,
            }
        }
    }
}

fn build_rank_prompt(profile: &str, interests: &[String], pool: &[CandidateJob]) -> String {
    let pool_json =
        serde_json::to_string_pretty(pool).unwrap_or_else(|_| "[]".to_string());
    RANK_PROMPT_TEMPLATE
        .replace("{profile}", profile)
        .replace("{interests}", &interests.join(", "))
        .replace("{pool_json}", &pool_json)
}

/// Strict decode of model output. `None` on any contract violation; the
/// decoded length is deliberately not capped at [`MAX_MATCHES`].
fn decode_matches(completion: &str) -> Option<Vec<RankedJob>> {
    let stripped = strip_code_fences(completion);
    let matches: Vec<RankedJob> = serde_json::from_str(stripped).ok()?;
    if matches.iter().all(RankedJob::is_well_formed) {
        Some(matches)
    } else {
        None
    }
}

/// Degraded path: the first [`MAX_MATCHES`] pool entries, unranked.
fn degraded(pool: &[CandidateJob]) -> Vec<RankedJob> {
    pool.iter()
        .take(MAX_MATCHES)
        .cloned()
        .map(RankedJob::from)
        .collect()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
