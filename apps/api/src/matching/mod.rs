//! Job matching pipeline: candidate aggregation, model-backed ranking with a
//! deterministic degraded path, and best-effort search auditing.

pub mod audit;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod ranker;
