//! Account handling: registration, login, bearer-token verification and the
//! route-guard middleware that resolves tokens to users.

pub mod handlers;
pub mod middleware;
pub mod tokens;

/// Hashes a password for storage with bcrypt at the default cost.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Checks a password against its stored hash.
/// A malformed stored hash counts as a mismatch rather than an error.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}
