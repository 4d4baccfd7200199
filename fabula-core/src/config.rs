//! Pipeline configuration.
//!
//! One immutable struct threaded through every component. No shared
//! mutable globals; tunables default from [`crate::constants`] and can
//! be overridden from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{FabulaError, FabulaResult};

/// Run-wide pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Words per narrative chunk.
    pub window_size: usize,
    /// Evidence chunks retrieved per backstory.
    pub top_k: usize,
    /// Inclusive mean-similarity threshold for a consistent prediction.
    pub similarity_threshold: f64,
    /// Minimum claim length in characters; shorter segments are noise.
    pub min_claim_chars: usize,
    /// Case-insensitive hedge markers; segments containing one are
    /// dropped as unverifiable.
    pub hedge_markers: Vec<String>,
    /// Embedding subsystem configuration.
    pub embedding: EmbeddingConfig,
}

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider selector: "hashed" (deterministic, always available)
    /// or "remote" (HTTP embedding server, falls back to hashed).
    pub provider: String,
    /// Vector dimensionality; a run-wide invariant.
    pub dimensions: usize,
    /// Chunk texts per provider call during index construction.
    pub batch_size: usize,
    /// Max entries in the in-memory embedding cache.
    pub cache_size: u64,
    /// Endpoint of the remote embedding server, if any.
    pub endpoint: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_size: constants::DEFAULT_WINDOW_SIZE,
            top_k: constants::DEFAULT_TOP_K,
            similarity_threshold: constants::DEFAULT_SIMILARITY_THRESHOLD,
            min_claim_chars: constants::DEFAULT_MIN_CLAIM_CHARS,
            hedge_markers: constants::DEFAULT_HEDGE_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "hashed".to_string(),
            dimensions: constants::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: constants::DEFAULT_EMBEDDING_BATCH_SIZE,
            cache_size: constants::DEFAULT_EMBEDDING_CACHE_SIZE,
            endpoint: String::new(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults; unknown keys are ignored.
    pub fn from_toml_file(path: &Path) -> FabulaResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| FabulaError::Config {
            reason: format!("cannot read '{}': {e}", path.display()),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| FabulaError::Config {
            reason: format!("cannot parse '{}': {e}", path.display()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline contracts cannot honor.
    pub fn validate(&self) -> FabulaResult<()> {
        if self.window_size == 0 {
            return Err(FabulaError::Config {
                reason: "window_size must be positive".to_string(),
            });
        }
        if self.top_k == 0 {
            return Err(FabulaError::Config {
                reason: "top_k must be positive".to_string(),
            });
        }
        if self.embedding.batch_size == 0 {
            return Err(FabulaError::Config {
                reason: "embedding.batch_size must be positive".to_string(),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(FabulaError::Config {
                reason: "embedding.dimensions must be positive".to_string(),
            });
        }
        Ok(())
    }
}
