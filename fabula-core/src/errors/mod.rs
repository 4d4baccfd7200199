//! Error taxonomy for the fabula pipeline.
//!
//! One enum per subsystem, unified under [`FabulaError`]. Every
//! user-visible failure names the story or backstory that triggered it.

mod embedding_error;
mod ingest_error;
mod pipeline_error;
mod reasoning_error;
mod retrieval_error;

pub use embedding_error::EmbeddingError;
pub use ingest_error::IngestError;
pub use pipeline_error::PipelineError;
pub use reasoning_error::ReasoningError;
pub use retrieval_error::RetrievalError;

/// Top-level error type. Subsystem errors convert via `?`.
#[derive(Debug, thiserror::Error)]
pub enum FabulaError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Reasoning(#[from] ReasoningError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("config error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used across the workspace.
pub type FabulaResult<T> = Result<T, FabulaError>;
