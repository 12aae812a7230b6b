use serde::{Deserialize, Serialize};

/// One externally sourced listing, as pooled by the aggregator.
///
/// `id` is assigned by the upstream source and is not guaranteed unique across
/// sources. A listing with an empty `id` AND an empty `link` is unusable and
/// is dropped during aggregation; every other combination is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Serialized as `type` on the wire ("Full-time", "Internship", ...).
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub link: String,
}

/// The shape the matching pipeline guarantees to callers: same fields as
/// [`CandidateJob`], but a model-decoded entry must carry a non-empty `title`
/// and `link` (checked via [`RankedJob::is_well_formed`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    pub skills: Vec<String>,
    pub link: String,
}

impl RankedJob {
    /// Contract check applied to model output after decoding. Degraded-path
    /// entries bypass this: they are mapped from the pool field-for-field.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty() && !self.link.trim().is_empty()
    }
}

impl From<CandidateJob> for RankedJob {
    fn from(job: CandidateJob) -> Self {
        RankedJob {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            employment_type: job.employment_type,
            description: job.description,
            skills: job.skills,
            link: job.link,
        }
    }
}
