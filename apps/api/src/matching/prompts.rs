// Prompt constants for the matching module.

/// Ranking prompt template. Replace `{profile}`, `{interests}` and
/// `{pool_json}` before sending.
pub const RANK_PROMPT_TEMPLATE: &str = r#"You are an expert career advisor. Below is a candidate's profile and a list of real job listings fetched from a job search service.

CANDIDATE PROFILE:
{profile}

CANDIDATE INTERESTS: {interests}

JOB LISTINGS (JSON):
{pool_json}

Select and rank the best matching jobs for this candidate. Return a JSON array where each element has this EXACT schema:
[
  {
    "id": "listing id, copied unchanged",
    "title": "job title",
    "company": "company name",
    "location": "location",
    "type": "employment type",
    "description": "one or two sentences on why this job fits the candidate",
    "skills": ["skill", "skill"],
    "link": "application link, copied unchanged"
  }
]

Rules:
- Choose ONLY from the listings above. Do not invent jobs.
- Copy "id" and "link" values exactly as they appear in the listing.
- Order the array best match first.
- Return at most 5 jobs; return all of them if fewer than 5 are listed.
- Respond with the JSON array only. No markdown fences, no commentary."#;
