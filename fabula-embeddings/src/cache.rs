//! In-memory embedding cache.
//!
//! Keys are blake3 content hashes of the input text, values are the
//! produced vectors. Backstories in an evaluation set repeat phrases
//! often enough that this pays for itself.

use moka::sync::Cache;

/// Content-hash keyed embedding cache.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_entries).build();
        Self { cache }
    }

    /// Hash text into a stable cache key.
    pub fn key_for(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = EmbeddingCache::new(16);
        let key = EmbeddingCache::key_for("some backstory");
        cache.insert(key.clone(), vec![0.5, 0.5]);
        assert_eq!(cache.get(&key), Some(vec![0.5, 0.5]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = EmbeddingCache::new(16);
        assert_eq!(cache.get("absent"), None);
    }

    #[test]
    fn keys_are_stable() {
        assert_eq!(
            EmbeddingCache::key_for("same text"),
            EmbeddingCache::key_for("same text")
        );
        assert_ne!(
            EmbeddingCache::key_for("one text"),
            EmbeddingCache::key_for("another text")
        );
    }
}
