#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Insert payload for one audit record of a model-ranked search.
/// Stores the submitted terms and a result count only, never the listings
/// themselves, so persisted free text stays bounded.
#[derive(Debug, Clone)]
pub struct NewSearchRecord {
    pub user_id: Uuid,
    pub profile: String,
    pub interests: Vec<String>,
    pub result_count: i32,
}

/// A persisted search audit row. Insert-only; retention is an external
/// concern and nothing in this service reads these back.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SearchRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub profile: String,
    pub interests: Vec<String>,
    pub result_count: i32,
    pub created_at: DateTime<Utc>,
}
