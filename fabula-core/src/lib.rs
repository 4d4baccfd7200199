//! # fabula-core
//!
//! Foundation crate for the fabula narrative consistency pipeline.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{EmbeddingConfig, PipelineConfig};
pub use errors::{FabulaError, FabulaResult};
pub use models::{Chunk, Contradiction, RetrievalResult, ScoredChunk, Verdict};
pub use traits::{IContradictionDetector, IEmbeddingProvider};
