use anyhow::{Context, Result};

/// Default provider order when `GEMINI_MODELS` is unset: fastest/cheapest
/// first, with progressively heavier models as fallbacks.
const DEFAULT_GEMINI_MODELS: &str = "gemini-1.5-flash,gemini-1.5-flash-8b,gemini-1.5-pro";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing; the upstream API keys
/// are optional so the service can boot in fully degraded mode without them.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub gemini_api_key: Option<String>,
    /// Ordered list of Gemini model ids forming the completion fallback chain.
    pub gemini_models: Vec<String>,
    pub jsearch_api_key: Option<String>,
    pub jsearch_country: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            jwt_secret: require_env("JWT_SECRET")?,
            token_ttl_minutes: std::env::var("TOKEN_TTL_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<i64>()
                .context("TOKEN_TTL_MINUTES must be an integer number of minutes")?,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_models: parse_model_list(
                &std::env::var("GEMINI_MODELS")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODELS.to_string()),
            ),
            jsearch_api_key: optional_env("JSEARCH_API_KEY"),
            jsearch_country: std::env::var("JSEARCH_COUNTRY").unwrap_or_else(|_| "us".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Returns the variable only when set AND non-empty, so an empty string in a
/// .env file reads as "unconfigured" rather than as a blank credential.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Splits a comma-separated model list, trimming entries and dropping blanks.
/// Order is preserved: it is the chain's priority order.
fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_list_preserves_order() {
        let models = parse_model_list("gemini-1.5-flash, gemini-1.5-pro");
        assert_eq!(models, vec!["gemini-1.5-flash", "gemini-1.5-pro"]);
    }

    #[test]
    fn test_parse_model_list_drops_blank_entries() {
        let models = parse_model_list("a,, b ,");
        assert_eq!(models, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_model_list_empty_input() {
        assert!(parse_model_list("").is_empty());
        assert!(parse_model_list(" , ,").is_empty());
    }

    #[test]
    fn test_default_model_list_is_nonempty_and_ordered() {
        let models = parse_model_list(DEFAULT_GEMINI_MODELS);
        assert!(models.len() >= 2);
        assert_eq!(models[0], "gemini-1.5-flash");
    }
}
