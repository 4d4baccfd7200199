//! # fabula-embeddings
//!
//! Maps text to fixed-length vectors and holds the per-chunk embedding
//! index. Providers sit behind a fallback chain; query embeddings are
//! cached by content hash. The index is built once per run and treated
//! as immutable afterwards.

pub mod cache;
pub mod chain;
pub mod engine;
pub mod index;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use index::ChunkIndex;
