//! Job discovery: external listing search plus the aggregation pass that
//! turns per-interest searches into one bounded candidate pool.

pub mod aggregator;
pub mod source;
