//! JWT issuing and verification.
//!
//! Tokens carry the user's email as subject plus an expiry; everything else
//! about the user is re-read from the database on each request, so a stale
//! token never serves stale profile data.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User email.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues a signed token for `email` valid for `ttl_minutes`.
pub fn issue_token(
    secret: &str,
    email: &str,
    ttl_minutes: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: email.to_string(),
        exp: (Utc::now() + Duration::minutes(ttl_minutes)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies signature and expiry, returning the claims on success.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
