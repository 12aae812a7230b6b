//! Candidate pool aggregation.
//!
//! Fans a user's interests out into per-term searches against one
//! [`JobSource`] and folds the results into a single bounded pool. Search
//! failures are absorbed per term: one dead term never empties the pool, and
//! a fully dead source yields an empty pool rather than an error.

use tracing::warn;

use crate::models::job::CandidateJob;

use super::source::JobSource;

/// At most this many interest terms are searched per request.
pub const MAX_SEARCH_TERMS: usize = 3;

/// Listings requested per search term.
pub const PAGE_SIZE_PER_TERM: u32 = 10;

/// Hard cap on the aggregated pool handed to ranking.
pub const MAX_POOL_SIZE: usize = 15;

/// Builds the candidate pool for one request.
///
/// Searches the first [`MAX_SEARCH_TERMS`] terms in order, keeping result
/// order within and across terms. The fallback term is searched only when
/// every per-term search left the pool empty. Listings with neither an id
/// nor a link are dropped; duplicates across terms are kept.
pub async fn aggregate(
    source: &dyn JobSource,
    terms: &[String],
    fallback_term: &str,
) -> Vec<CandidateJob> {
    let mut pool: Vec<CandidateJob> = Vec::new();

    for term in terms.iter().take(MAX_SEARCH_TERMS) {
        pool.extend(search_term(source, term).await);
    }

    if pool.is_empty() {
        pool = search_term(source, fallback_term).await;
    }

    pool.truncate(MAX_POOL_SIZE);
    pool
}

/// One term's search, with failure absorbed and unusable listings dropped.
async fn search_term(source: &dyn JobSource, term: &str) -> Vec<CandidateJob> {
    match source.search(term, PAGE_SIZE_PER_TERM).await {
        Ok(listings) => listings
            .into_iter()
            .filter(|job| !job.id.is_empty() || !job.link.is_empty())
            .collect(),
        Err(e) => {
            warn!("job search for '{}' failed: {e}", term);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::source::JobSourceError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    enum Scripted {
        Listings(Vec<CandidateJob>),
        Fail,
    }

    /// Source stub: a per-term script plus a log of the calls made.
    struct ScriptedSource {
        script: HashMap<String, Scripted>,
        calls: Mutex<Vec<(String, u32)>>,
    }

    impl ScriptedSource {
        fn new(script: Vec<(&str, Scripted)>) -> Self {
            Self {
                script: script
                    .into_iter()
                    .map(|(term, outcome)| (term.to_string(), outcome))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(term, _)| term.clone())
                .collect()
        }

        fn page_sizes(&self) -> Vec<u32> {
            self.calls.lock().unwrap().iter().map(|(_, n)| *n).collect()
        }
    }

    #[async_trait]
    impl JobSource for ScriptedSource {
        async fn search(
            &self,
            term: &str,
            page_size: u32,
        ) -> Result<Vec<CandidateJob>, JobSourceError> {
            self.calls.lock().unwrap().push((term.to_string(), page_size));
            match self.script.get(term) {
                Some(Scripted::Listings(jobs)) => Ok(jobs.clone()),
                Some(Scripted::Fail) => Err(JobSourceError::Status(500)),
                None => Ok(Vec::new()),
            }
        }
    }

    fn job(id: &str, title: &str) -> CandidateJob {
        CandidateJob {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            employment_type: "FULLTIME".to_string(),
            description: "desc".to_string(),
            skills: vec!["Rust".to_string()],
            link: format!("https://jobs.example/{id}"),
        }
    }

    fn jobs(prefix: &str, count: usize) -> Vec<CandidateJob> {
        (0..count)
            .map(|i| job(&format!("{prefix}-{i}"), &format!("{prefix} role {i}")))
            .collect()
    }

    fn terms(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_only_first_three_terms_are_searched() {
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Listings(jobs("rust", 1))),
            ("go", Scripted::Listings(jobs("go", 1))),
            ("python", Scripted::Listings(jobs("python", 1))),
            ("java", Scripted::Listings(jobs("java", 1))),
        ]);

        let pool = aggregate(&source, &terms(&["rust", "go", "python", "java"]), "fallback").await;

        assert_eq!(source.calls(), vec!["rust", "go", "python"]);
        assert_eq!(pool.len(), 3);
    }

    #[tokio::test]
    async fn test_every_call_requests_the_fixed_page_size() {
        let source = ScriptedSource::new(vec![("rust", Scripted::Fail)]);

        aggregate(&source, &terms(&["rust", "go"]), "fallback").await;

        // Two term searches plus the fallback, all at ten per page.
        assert_eq!(source.page_sizes(), vec![PAGE_SIZE_PER_TERM; 3]);
    }

    #[tokio::test]
    async fn test_order_is_preserved_across_terms() {
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Listings(jobs("rust", 2))),
            ("go", Scripted::Listings(jobs("go", 2))),
        ]);

        let pool = aggregate(&source, &terms(&["rust", "go"]), "fallback").await;

        let ids: Vec<&str> = pool.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["rust-0", "rust-1", "go-0", "go-1"]);
    }

    #[tokio::test]
    async fn test_fallback_runs_only_when_pool_is_empty() {
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Fail),
            ("fallback", Scripted::Listings(jobs("fb", 2))),
        ]);

        let pool = aggregate(&source, &terms(&["rust", "go"]), "fallback").await;

        assert_eq!(source.calls(), vec!["rust", "go", "fallback"]);
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|j| j.id.starts_with("fb-")));
    }

    #[tokio::test]
    async fn test_fallback_skipped_when_any_term_produced_results() {
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Fail),
            ("go", Scripted::Listings(jobs("go", 1))),
            ("fallback", Scripted::Listings(jobs("fb", 5))),
        ]);

        let pool = aggregate(&source, &terms(&["rust", "go"]), "fallback").await;

        assert_eq!(source.calls(), vec!["rust", "go"]);
        assert_eq!(pool.len(), 1);
    }

    #[tokio::test]
    async fn test_term_failure_is_absorbed() {
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Listings(jobs("rust", 2))),
            ("go", Scripted::Fail),
            ("python", Scripted::Listings(jobs("python", 1))),
        ]);

        let pool = aggregate(&source, &terms(&["rust", "go", "python"]), "fallback").await;

        assert_eq!(pool.len(), 3);
    }

    #[tokio::test]
    async fn test_listing_without_id_or_link_is_dropped() {
        let mut unusable = job("", "Mystery role");
        unusable.link = String::new();
        let usable_by_link = CandidateJob {
            id: String::new(),
            ..job("x", "Linked role")
        };

        let source = ScriptedSource::new(vec![(
            "rust",
            Scripted::Listings(vec![unusable, usable_by_link]),
        )]);

        let pool = aggregate(&source, &terms(&["rust"]), "fallback").await;

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].title, "Linked role");
    }

    #[tokio::test]
    async fn test_pool_is_capped_at_fifteen() {
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Listings(jobs("rust", 10))),
            ("go", Scripted::Listings(jobs("go", 10))),
        ]);

        let pool = aggregate(&source, &terms(&["rust", "go"]), "fallback").await;

        assert_eq!(pool.len(), MAX_POOL_SIZE);
        // The cap trims from the tail, so every rust listing survives.
        assert!(pool[..10].iter().all(|j| j.id.starts_with("rust-")));
        assert!(pool[10..].iter().all(|j| j.id.starts_with("go-")));
    }

    #[tokio::test]
    async fn test_duplicate_listings_across_terms_are_kept() {
        let shared = job("same-id", "Shared role");
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Listings(vec![shared.clone()])),
            ("go", Scripted::Listings(vec![shared.clone()])),
        ]);

        let pool = aggregate(&source, &terms(&["rust", "go"]), "fallback").await;

        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].id, pool[1].id);
    }

    #[tokio::test]
    async fn test_everything_failing_yields_empty_pool() {
        let source = ScriptedSource::new(vec![
            ("rust", Scripted::Fail),
            ("fallback", Scripted::Fail),
        ]);

        let pool = aggregate(&source, &terms(&["rust"]), "fallback").await;

        assert!(pool.is_empty());
    }
}
