//! Top-K evidence retriever.

use std::cmp::Ordering;

use fabula_core::errors::{FabulaResult, RetrievalError};
use fabula_core::models::{RetrievalResult, ScoredChunk};
use fabula_embeddings::ChunkIndex;
use tracing::debug;

use crate::similarity;

/// Scores one story's chunks against a query vector and returns the
/// top K. Borrows the index immutably; the index never changes after
/// construction, so retrievals are freely repeatable.
pub struct Retriever<'a> {
    index: &'a ChunkIndex,
}

impl<'a> Retriever<'a> {
    pub fn new(index: &'a ChunkIndex) -> Self {
        Self { index }
    }

    /// Retrieve up to `k` chunks for `story_id` ranked by cosine
    /// similarity to `query`.
    ///
    /// Ordering is a total order: score descending, ties broken by
    /// chunk ordinal ascending, so rationale text and confidence are
    /// reproducible across runs. Fewer than `k` candidates is a normal
    /// outcome; an unknown story yields an empty result. A zero-length
    /// or zero-magnitude query is an error — its direction is
    /// undefined and any ranking would be noise.
    pub fn retrieve(
        &self,
        story_id: &str,
        query: &[f32],
        k: usize,
    ) -> FabulaResult<RetrievalResult> {
        if k == 0 {
            return Err(RetrievalError::InvalidK { k }.into());
        }
        if query.is_empty() || similarity::l2_norm(query) == 0.0 {
            return Err(RetrievalError::EmptyQuery.into());
        }

        let candidates = self.index.vectors_for(story_id);
        if candidates.is_empty() {
            debug!(story_id, "no chunks for story");
            return Ok(RetrievalResult::default());
        }

        let mut hits: Vec<ScoredChunk> = candidates
            .iter()
            .map(|(chunk, embedding)| ScoredChunk {
                text: chunk.text.clone(),
                ordinal: chunk.ordinal,
                score: similarity::cosine(query, embedding),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.ordinal.cmp(&b.ordinal))
        });
        hits.truncate(k);

        debug!(
            story_id,
            hits = hits.len(),
            top_score = hits.first().map(|h| h.score).unwrap_or(0.0),
            "retrieved evidence"
        );

        Ok(RetrievalResult::new(hits))
    }
}
