//! Text artifact generation: resume analysis, interview questions and cover
//! letters. Each artifact runs through the completion chain and falls back
//! to canned content when the chain is exhausted, so these endpoints stay up
//! through provider outages.

pub mod canned;
pub mod handlers;
pub mod prompts;
