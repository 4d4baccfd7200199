//! Hashed term-frequency embedding provider.
//!
//! Buckets terms into a fixed-dimension vector via feature hashing and
//! weights by term frequency. Deterministic, dependency-free at run
//! time, and always available — the last line of the fallback chain.

use std::collections::HashMap;

use fabula_core::errors::FabulaResult;
use fabula_core::traits::IEmbeddingProvider;

/// Deterministic hashed term-frequency provider.
///
/// Not as semantically rich as a neural model, but identical input
/// always yields identical output, which the pipeline's determinism
/// guarantee depends on.
pub struct HashedProvider {
    dimensions: usize,
}

impl HashedProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Map a term to a bucket and a sign. Signed hashing keeps the
    /// expected dot product of unrelated texts near zero.
    fn bucket_and_sign(term: &str, dims: usize) -> (usize, f32) {
        let digest = blake3::hash(term.as_bytes());
        let bytes = digest.as_bytes();
        let h = u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        ((h as usize) % dims, sign)
    }

    /// Tokenize into lowercase alphanumeric terms, dropping one-char
    /// fragments.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let terms = Self::tokenize(text);
        if terms.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for term in &terms {
            *tf.entry(term.clone()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // Longer terms carry more signal; short ones are mostly stopwords.
            let weight = 1.0 + (term.len() as f32).ln();
            let (bucket, sign) = Self::bucket_and_sign(term, self.dimensions);
            vec[bucket] += sign * freq * weight;
        }

        // L2 normalize. The retriever re-normalizes defensively, but a
        // unit-norm output keeps raw dot products meaningful too.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingProvider for HashedProvider {
    fn embed(&self, text: &str) -> FabulaResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> FabulaResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
