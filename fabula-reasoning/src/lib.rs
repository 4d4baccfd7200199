//! # fabula-reasoning
//!
//! Decomposes a backstory into checkable claims and evaluates them
//! against retrieved evidence. Aggregation is fail-fast: the first
//! contradicted claim decides the outcome, keeping the rationale
//! focused on a single auditable cause.

pub mod checker;
pub mod claims;
pub mod detection;

pub use checker::{CheckOutcome, CheckState, ConsistencyChecker};
pub use claims::extract_claims;
pub use detection::KeywordDetector;
