//! EmbeddingEngine — the single entry point other crates use to embed
//! text. Wraps provider selection, the fallback chain, and the
//! content-hash cache.

use fabula_core::config::EmbeddingConfig;
use fabula_core::errors::{EmbeddingError, FabulaResult};
use fabula_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::EmbeddingCache;
use crate::chain::{DegradationEvent, FallbackChain};
use crate::providers::{self, HashedProvider};

/// Embedding engine: configured provider chain plus cache.
pub struct EmbeddingEngine {
    chain: FallbackChain,
    cache: EmbeddingCache,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Build the engine from configuration.
    ///
    /// The configured primary goes first; the hashed provider is always
    /// appended as the last-resort fallback so the engine can never be
    /// left without a working provider.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let mut chain = FallbackChain::new();
        chain.push(providers::create_provider(config));
        chain.push(Box::new(HashedProvider::new(config.dimensions)));

        info!(
            provider = chain.active_provider_name(),
            dimensions = config.dimensions,
            "embedding engine initialized"
        );

        Self {
            chain,
            cache: EmbeddingCache::new(config.cache_size),
            dimensions: config.dimensions,
        }
    }

    /// Build an engine around one explicit provider. Used by tests and
    /// by callers that construct providers themselves.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, cache_size: u64) -> Self {
        let dimensions = provider.dimensions();
        let mut chain = FallbackChain::new();
        chain.push(provider);
        Self {
            chain,
            cache: EmbeddingCache::new(cache_size),
            dimensions,
        }
    }

    /// Embed one query text, consulting the cache first.
    pub fn embed_query(&mut self, text: &str) -> FabulaResult<Vec<f32>> {
        let key = EmbeddingCache::key_for(text);
        if let Some(vector) = self.cache.get(&key) {
            debug!(key = %key, "embedding cache hit");
            return Ok(vector);
        }

        let vector = self.chain.embed(text)?;
        self.check_dimensions(&vector)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    /// Embed a batch of texts in order. Bypasses the cache: index
    /// construction embeds each chunk exactly once.
    pub fn embed_batch(&mut self, texts: &[String]) -> FabulaResult<Vec<Vec<f32>>> {
        let vectors = self.chain.embed_batch(texts)?;
        for vector in &vectors {
            self.check_dimensions(vector)?;
        }
        Ok(vectors)
    }

    /// Every vector the engine hands out has the configured width.
    /// Queries and chunks are scored against each other, so a single
    /// off-width vector would corrupt similarities run-wide.
    fn check_dimensions(&self, vector: &[f32]) -> FabulaResult<()> {
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::Dimensions {
                provider: self.chain.active_provider_name().to_string(),
                expected: self.dimensions,
                got: vector.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Vector dimensionality, a run-wide invariant.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Name of the provider currently serving requests.
    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    /// Drain recorded provider degradations.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }
}
