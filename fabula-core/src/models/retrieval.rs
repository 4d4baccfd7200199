use serde::{Deserialize, Serialize};

/// One evidence chunk scored against a backstory query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// Chunk text (already whitespace-normalized by the chunker).
    pub text: String,
    /// Ordinal of the chunk within its source story. Carried so that
    /// ties on score break deterministically.
    pub ordinal: usize,
    /// Cosine similarity against the query, in [-1, 1].
    pub score: f64,
}

/// Ordered evidence set for one backstory: at most K chunks, scores
/// non-increasing, ties broken by ordinal ascending.
///
/// An empty result is the designed unknown-story signal, distinct from
/// an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub hits: Vec<ScoredChunk>,
}

impl RetrievalResult {
    pub fn new(hits: Vec<ScoredChunk>) -> Self {
        Self { hits }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Highest-scoring chunk, if any.
    pub fn top(&self) -> Option<&ScoredChunk> {
        self.hits.first()
    }

    /// Mean similarity across all returned hits.
    ///
    /// Returns 0.0 for an empty result so callers do not have to
    /// special-case division by zero.
    pub fn mean_score(&self) -> f64 {
        if self.hits.is_empty() {
            return 0.0;
        }
        self.hits.iter().map(|h| h.score).sum::<f64>() / self.hits.len() as f64
    }

    /// Evidence texts in rank order, cloned for claim checking.
    pub fn evidence_texts(&self) -> Vec<String> {
        self.hits.iter().map(|h| h.text.clone()).collect()
    }
}
