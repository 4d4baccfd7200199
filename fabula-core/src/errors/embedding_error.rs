/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider '{provider}' failed: {reason}")]
    Provider { provider: String, reason: String },

    #[error("batch embedding failed for story '{story_id}' (batch starting at chunk {offset}): {reason}")]
    Batch {
        story_id: String,
        offset: usize,
        reason: String,
    },

    #[error("provider '{provider}' returned {got} vectors for {expected} texts")]
    BatchShape {
        provider: String,
        expected: usize,
        got: usize,
    },

    #[error("provider '{provider}' returned a {got}-dimensional vector, expected {expected}")]
    Dimensions {
        provider: String,
        expected: usize,
        got: usize,
    },

    #[error("all {tried} embedding providers exhausted")]
    Exhausted { tried: usize },
}
