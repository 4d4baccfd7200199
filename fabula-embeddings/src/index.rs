//! Chunk embedding index.
//!
//! Built once per run from the full chunk sequence, then read-only.
//! Owns every chunk together with its vector; `(story_id, ordinal)` is
//! unique within the index.

use std::collections::HashMap;

use fabula_core::errors::{EmbeddingError, FabulaResult};
use fabula_core::models::Chunk;
use tracing::{debug, info};

use crate::engine::EmbeddingEngine;

/// One indexed chunk with its embedding.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub chunk: Chunk,
    pub embedding: Vec<f32>,
}

/// Immutable per-chunk embedding store.
#[derive(Debug)]
pub struct ChunkIndex {
    entries: Vec<IndexEntry>,
    /// Entry positions per story, in ordinal order.
    by_story: HashMap<String, Vec<usize>>,
}

impl ChunkIndex {
    /// Embed all chunks in batches and build the index.
    ///
    /// Batching is a performance knob only: chunk identity and order
    /// are preserved regardless of `batch_size`. A provider failure
    /// here is fatal for the run — a partial narrative index is not an
    /// acceptable evidence base — and the error names the story of the
    /// offending batch.
    pub fn build(
        chunks: Vec<Chunk>,
        engine: &mut EmbeddingEngine,
        batch_size: usize,
    ) -> FabulaResult<Self> {
        assert!(batch_size > 0, "batch_size must be positive");

        let mut entries = Vec::with_capacity(chunks.len());

        for (batch_index, batch) in chunks.chunks(batch_size).enumerate() {
            let batch_start = batch_index * batch_size;
            let texts: Vec<String> = batch.iter().map(|c| c.text.clone()).collect();

            let vectors = engine.embed_batch(&texts).map_err(|e| {
                EmbeddingError::Batch {
                    story_id: batch
                        .first()
                        .map(|c| c.story_id.clone())
                        .unwrap_or_default(),
                    offset: batch_start,
                    reason: e.to_string(),
                }
            })?;

            if vectors.len() != batch.len() {
                return Err(EmbeddingError::Batch {
                    story_id: batch
                        .first()
                        .map(|c| c.story_id.clone())
                        .unwrap_or_default(),
                    offset: batch_start,
                    reason: format!("expected {} vectors, got {}", batch.len(), vectors.len()),
                }
                .into());
            }

            for (chunk, embedding) in batch.iter().cloned().zip(vectors) {
                entries.push(IndexEntry { chunk, embedding });
            }

            debug!(
                offset = batch_start,
                size = batch.len(),
                "embedded chunk batch"
            );
        }

        let mut by_story: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, entry) in entries.iter().enumerate() {
            by_story
                .entry(entry.chunk.story_id.clone())
                .or_default()
                .push(pos);
        }

        info!(
            chunks = entries.len(),
            stories = by_story.len(),
            "chunk index built"
        );

        Ok(Self { entries, by_story })
    }

    /// All `(chunk, vector)` pairs for one story, in ordinal order.
    /// Unknown stories yield an empty sequence — the designed
    /// unknown-story signal, not an error.
    pub fn vectors_for(&self, story_id: &str) -> Vec<(&Chunk, &[f32])> {
        self.by_story
            .get(story_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| {
                        let entry = &self.entries[pos];
                        (&entry.chunk, entry.embedding.as_slice())
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any chunks exist for this story.
    pub fn has_story(&self, story_id: &str) -> bool {
        self.by_story.contains_key(story_id)
    }

    /// Total chunk count across all stories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct stories in the index.
    pub fn story_count(&self) -> usize {
        self.by_story.len()
    }
}
