//! External job listing source.
//!
//! [`JSearchClient`] talks to the JSearch API on RapidAPI and normalizes its
//! listing shape into [`CandidateJob`]. [`UnconfiguredSource`] stands in when
//! no API key is configured, so the rest of the pipeline never needs to know
//! whether job search is actually wired up.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::job::CandidateJob;

const JSEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_API_HOST: &str = "jsearch.p.rapidapi.com";

/// Per-call deadline, matching the completion chain's budget.
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum JobSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job source returned status {0}")]
    Status(u16),

    #[error("job source is not configured")]
    NotConfigured,
}

/// A searchable supply of job listings. The aggregator only sees this trait;
/// tests script it, production binds [`JSearchClient`] or
/// [`UnconfiguredSource`].
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Searches listings for one term, returning at most `page_size` results.
    async fn search(&self, term: &str, page_size: u32)
        -> Result<Vec<CandidateJob>, JobSourceError>;
}

/// Raw JSearch listing. Every field is optional: the upstream feed omits
/// keys freely and unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct RawListing {
    job_id: Option<String>,
    job_title: Option<String>,
    employer_name: Option<String>,
    job_city: Option<String>,
    job_state: Option<String>,
    job_country: Option<String>,
    #[serde(default)]
    job_is_remote: bool,
    job_employment_type: Option<String>,
    job_description: Option<String>,
    job_highlights: Option<JobHighlights>,
    job_required_skills: Option<Vec<String>>,
    job_apply_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobHighlights {
    #[serde(rename = "Qualifications", default)]
    qualifications: Vec<String>,
    #[serde(rename = "Responsibilities", default)]
    responsibilities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<RawListing>,
}

impl RawListing {
    /// Maps the upstream shape onto [`CandidateJob`], substituting empty
    /// strings for absent fields so downstream code can stay Option-free.
    fn into_candidate(self) -> CandidateJob {
        let location = {
            let parts: Vec<&str> = [&self.job_city, &self.job_state, &self.job_country]
                .into_iter()
                .filter_map(|p| p.as_deref())
                .filter(|p| !p.trim().is_empty())
                .collect();
            if !parts.is_empty() {
                parts.join(", ")
            } else if self.job_is_remote {
                "Remote".to_string()
            } else {
                String::new()
            }
        };

        let description = match self.job_description {
            Some(d) if !d.trim().is_empty() => d,
            _ => self
                .job_highlights
                .map(|h| {
                    h.qualifications
                        .into_iter()
                        .chain(h.responsibilities)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default(),
        };

        CandidateJob {
            id: self.job_id.unwrap_or_default(),
            title: self.job_title.unwrap_or_default(),
            company: self.employer_name.unwrap_or_default(),
            location,
            employment_type: self.job_employment_type.unwrap_or_default(),
            description,
            skills: self.job_required_skills.unwrap_or_default(),
            link: self.job_apply_link.unwrap_or_default(),
        }
    }
}

/// JSearch (RapidAPI) client.
#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    api_key: String,
    country: String,
}

impl JSearchClient {
    pub fn new(api_key: String, country: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(CALL_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            country,
        }
    }
}

#[async_trait]
impl JobSource for JSearchClient {
    async fn search(
        &self,
        term: &str,
        page_size: u32,
    ) -> Result<Vec<CandidateJob>, JobSourceError> {
        let response = self
            .client
            .get(JSEARCH_API_URL)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", JSEARCH_API_HOST)
            .query(&[
                ("query", term),
                ("page", "1"),
                ("num_pages", "1"),
                ("country", self.country.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobSourceError::Status(status.as_u16()));
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed
            .data
            .into_iter()
            .map(RawListing::into_candidate)
            .take(page_size as usize)
            .collect())
    }
}

/// Placeholder source bound when no JSearch key is configured.
/// Every search fails, which the aggregator absorbs as an empty pool.
pub struct UnconfiguredSource;

#[async_trait]
impl JobSource for UnconfiguredSource {
    async fn search(
        &self,
        _term: &str,
        _page_size: u32,
    ) -> Result<Vec<CandidateJob>, JobSourceError> {
        Err(JobSourceError::NotConfigured)
    }
}
