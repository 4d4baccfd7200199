//! # fabula-pipeline
//!
//! Sequences chunked narratives, the embedding index, retrieval, claim
//! extraction, and consistency checking into one verdict per backstory.
//! Records are evaluated strictly sequentially; a failure on one record
//! never aborts the run.

pub mod cases;
pub mod orchestrator;

pub use cases::{load_cases, write_verdicts, BackstoryCase};
pub use orchestrator::Orchestrator;
