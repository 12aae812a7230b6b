pub mod job;
pub mod search;
pub mod user;
