/// Retrieval subsystem errors.
///
/// Note that "no chunks for this story" is NOT an error: it is the
/// designed unknown-story signal, represented by an empty result.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query vector is empty or has zero magnitude; cosine normalization is undefined")]
    EmptyQuery,

    #[error("retrieval requires k > 0, got {k}")]
    InvalidK { k: usize },
}
