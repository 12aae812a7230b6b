//! Completion fallback chain: an ordered list of generative-text providers
//! tried top to bottom until one answers.
//!
//! ARCHITECTURAL RULE: no other module may call a text-generation API
//! directly. Everything goes through [`CompletionChain::complete`], which
//! absorbs every provider-level failure and reports exhaustion as `None`,
//! a defined outcome each caller must handle.

pub mod gemini;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure taxonomy for a single provider call.
///
/// Advisory only: the chain logs the cause and advances to the next provider
/// regardless of which variant occurred. The split exists so operators can
/// tell quota exhaustion from a retired model id in the logs.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("{0}")]
    Other(String),
}

impl GenerateError {
    /// Short cause label used in fallback logs.
    pub fn cause(&self) -> &'static str {
        match self {
            GenerateError::RateLimited(_) => "rate_limited",
            GenerateError::ModelNotFound(_) => "model_not_found",
            GenerateError::Other(_) => "error",
        }
    }
}

/// One generative-text backend. Implemented by [`gemini::GeminiClient`] in
/// production and by scripted stubs in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// One configured entry in the chain: a model name plus its client handle.
/// Built once at startup from config, shared read-only across requests.
#[derive(Clone)]
pub struct Provider {
    pub name: String,
    pub client: Arc<dyn TextGenerator>,
}

/// Ordered preference chain over text providers. Not a fan-out: iteration is
/// strictly sequential and stops at the first usable response.
pub struct CompletionChain {
    providers: Vec<Provider>,
}

impl CompletionChain {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Runs one pass over the providers in priority order and returns the
    /// first non-empty completion. Each provider is called exactly once per
    /// pass; a caller wanting repetition must call `complete` again.
    ///
    /// Returns `None` when the list is empty or every provider failed or
    /// answered with blank text. Never returns an error and never panics.
    pub async fn complete(&self, prompt: &str) -> Option<String> {
        for provider in &self.providers {
            match provider.client.generate(prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(
                        "provider '{}' completed ({} chars)",
                        provider.name,
                        text.len()
                    );
                    return Some(text);
                }
                Ok(_) => {
                    warn!(
                        "provider '{}' returned a blank completion, trying next",
                        provider.name
                    );
                }
                Err(e) => {
                    warn!(
                        "provider '{}' failed ({}): {e}, trying next",
                        provider.name,
                        e.cause()
                    );
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted generator: returns a fixed outcome and counts invocations.
    struct ScriptedGenerator {
        outcome: Result<String, &'static str>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(message: &'static str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(message),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(GenerateError::Other((*message).to_string())),
            }
        }
    }

    fn provider(name: &str, client: Arc<ScriptedGenerator>) -> Provider {
        Provider {
            name: name.to_string(),
            client,
        }
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let chain = CompletionChain::new(Vec::new());
        assert_eq!(chain.complete("any prompt").await, None);
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let first = ScriptedGenerator::ok("first answer");
        let second = ScriptedGenerator::ok("second answer");
        let chain = CompletionChain::new(vec![
            provider("a", first.clone()),
            provider("b", second.clone()),
        ]);

        let result = chain.complete("prompt").await;
        assert_eq!(result.as_deref(), Some("first answer"));
        assert_eq!(first.call_count(), 1);
        assert_eq!(second.call_count(), 0, "later providers must not be called");
    }

    #[tokio::test]
    async fn test_failures_advance_to_next_provider() {
        let broken = ScriptedGenerator::failing("boom");
        let also_broken = ScriptedGenerator::failing("quota");
        let working = ScriptedGenerator::ok("rescued");
        let unused = ScriptedGenerator::ok("never");
        let chain = CompletionChain::new(vec![
            provider("a", broken.clone()),
            provider("b", also_broken.clone()),
            provider("c", working.clone()),
            provider("d", unused.clone()),
        ]);

        let result = chain.complete("prompt").await;
        assert_eq!(result.as_deref(), Some("rescued"));
        assert_eq!(broken.call_count(), 1);
        assert_eq!(also_broken.call_count(), 1);
        assert_eq!(working.call_count(), 1);
        assert_eq!(unused.call_count(), 0);
    }

    #[tokio::test]
    async fn test_all_failing_returns_none_without_error() {
        let a = ScriptedGenerator::failing("down");
        let b = ScriptedGenerator::failing("down too");
        let chain = CompletionChain::new(vec![provider("a", a.clone()), provider("b", b.clone())]);

        assert_eq!(chain.complete("prompt").await, None);
        // One pass only: each provider tried exactly once.
        assert_eq!(a.call_count(), 1);
        assert_eq!(b.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_completion_counts_as_failure() {
        let blank = ScriptedGenerator::ok("   \n  ");
        let working = ScriptedGenerator::ok("real text");
        let chain = CompletionChain::new(vec![
            provider("a", blank.clone()),
            provider("b", working.clone()),
        ]);

        assert_eq!(chain.complete("prompt").await.as_deref(), Some("real text"));
    }

    #[test]
    fn test_error_causes_are_labelled() {
        assert_eq!(
            GenerateError::RateLimited("q".to_string()).cause(),
            "rate_limited"
        );
        assert_eq!(
            GenerateError::ModelNotFound("m".to_string()).cause(),
            "model_not_found"
        );
        assert_eq!(GenerateError::Other("x".to_string()).cause(), "error");
    }
}
