//! Remote embedding provider.
//!
//! Talks to an external embedding server (sentence-transformers style)
//! over blocking HTTP. Wire format: POST `{"texts": [...]}` → 200
//! `{"embeddings": [[...], ...]}`.

use std::time::Duration;

use fabula_core::errors::{EmbeddingError, FabulaResult};
use fabula_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct EmbedRequest<'a> {
    texts: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// HTTP client for an external embedding server.
///
/// The server is trusted to be deterministic within a run; that
/// assumption is documented, not re-verified here.
pub struct RemoteProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    dimensions: usize,
}

impl RemoteProvider {
    pub fn new(endpoint: String, dimensions: usize) -> FabulaResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| EmbeddingError::Provider {
                provider: "remote".to_string(),
                reason: format!("http client construction failed: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint,
            dimensions,
        })
    }

    /// Reject responses with the wrong vector count or width. Every
    /// vector must match the configured dimensionality; a mismatch
    /// here would otherwise surface as silently wrong similarities.
    fn validate_shape(&self, expected_count: usize, embeddings: &[Vec<f32>]) -> FabulaResult<()> {
        if embeddings.len() != expected_count {
            return Err(EmbeddingError::BatchShape {
                provider: "remote".to_string(),
                expected: expected_count,
                got: embeddings.len(),
            }
            .into());
        }

        if let Some(bad) = embeddings.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::Dimensions {
                provider: "remote".to_string(),
                expected: self.dimensions,
                got: bad.len(),
            }
            .into());
        }

        Ok(())
    }

    fn request(&self, texts: &[String]) -> FabulaResult<Vec<Vec<f32>>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest { texts })
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| EmbeddingError::Provider {
                provider: "remote".to_string(),
                reason: e.to_string(),
            })?;

        let body: EmbedResponse = response.json().map_err(|e| EmbeddingError::Provider {
            provider: "remote".to_string(),
            reason: format!("malformed response: {e}"),
        })?;

        self.validate_shape(texts.len(), &body.embeddings)?;

        debug!(
            endpoint = %self.endpoint,
            texts = texts.len(),
            "remote embedding request complete"
        );

        Ok(body.embeddings)
    }
}

impl IEmbeddingProvider for RemoteProvider {
    fn embed(&self, text: &str) -> FabulaResult<Vec<f32>> {
        let mut vectors = self.request(&[text.to_string()])?;
        Ok(vectors.remove(0))
    }

    fn embed_batch(&self, texts: &[String]) -> FabulaResult<Vec<Vec<f32>>> {
        self.request(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "remote"
    }

    fn is_available(&self) -> bool {
        !self.endpoint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(endpoint: &str, dimensions: usize) -> RemoteProvider {
        RemoteProvider::new(endpoint.to_string(), dimensions).unwrap()
    }

    #[test]
    fn unconfigured_endpoint_is_unavailable() {
        assert!(!provider("", 384).is_available());
    }

    #[test]
    fn configured_endpoint_is_available() {
        assert!(provider("http://127.0.0.1:9999/embed", 384).is_available());
    }

    #[test]
    fn matching_shape_is_accepted() {
        let p = provider("http://localhost/embed", 4);
        assert!(p
            .validate_shape(2, &[vec![0.0; 4], vec![0.0; 4]])
            .is_ok());
    }

    #[test]
    fn wrong_vector_count_is_rejected() {
        let p = provider("http://localhost/embed", 4);
        let err = p.validate_shape(2, &[vec![0.0; 4]]).unwrap_err();
        assert!(err.to_string().contains("1 vectors for 2 texts"));
    }

    #[test]
    fn wrong_vector_width_is_rejected() {
        // A server speaking a different model's width must fail loudly,
        // not truncate into the dot product.
        let p = provider("http://localhost/embed", 4);
        let err = p
            .validate_shape(2, &[vec![0.0; 4], vec![0.0; 8]])
            .unwrap_err();
        assert!(err.to_string().contains("8-dimensional"));
        assert!(err.to_string().contains("expected 4"));
    }
}
