//! Shared data model for the pipeline.

mod chunk;
mod contradiction;
mod retrieval;
mod verdict;

pub use chunk::Chunk;
pub use contradiction::Contradiction;
pub use retrieval::{RetrievalResult, ScoredChunk};
pub use verdict::{round3, Verdict};
