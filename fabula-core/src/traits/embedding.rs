use crate::errors::FabulaResult;

/// Embedding generation provider.
///
/// Vectors for the same text must be identical across calls within a
/// run; the pipeline's determinism guarantee rests on this.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> FabulaResult<Vec<f32>>;

    /// Embed a batch of texts, preserving order. Output length must
    /// equal input length.
    fn embed_batch(&self, texts: &[String]) -> FabulaResult<Vec<Vec<f32>>>;

    /// Dimensionality of every vector this provider produces.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name, used in logs and errors.
    fn name(&self) -> &str;

    /// Whether this provider can currently serve requests.
    fn is_available(&self) -> bool;
}
