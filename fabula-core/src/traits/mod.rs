//! Trait seams between subsystems.

mod contradiction;
mod embedding;

pub use contradiction::IContradictionDetector;
pub use embedding::IEmbeddingProvider;
