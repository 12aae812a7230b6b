#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// An account row. Deliberately not `Serialize`: responses expose the
/// `UserProfile` view instead, which excludes the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}
