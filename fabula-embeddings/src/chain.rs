//! Provider fallback chain.
//!
//! Tries providers in priority order. Every fallback is recorded so
//! the operator can see when the run degraded to a weaker provider.

use fabula_core::errors::{EmbeddingError, FabulaResult};
use fabula_core::traits::IEmbeddingProvider;
use tracing::warn;

/// One recorded degradation: the primary failed and a fallback served
/// the request instead.
#[derive(Debug, Clone)]
pub struct DegradationEvent {
    pub failed_provider: String,
    pub fallback_used: String,
}

/// Ordered chain of embedding providers.
pub struct FallbackChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    events: Vec<DegradationEvent>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed a single text via the first provider that succeeds.
    pub fn embed(&mut self, text: &str) -> FabulaResult<Vec<f32>> {
        self.try_chain(|p| p.embed(text))
    }

    /// Embed a batch via the first provider that succeeds.
    pub fn embed_batch(&mut self, texts: &[String]) -> FabulaResult<Vec<Vec<f32>>> {
        self.try_chain(|p| p.embed_batch(texts))
    }

    fn try_chain<T>(
        &mut self,
        mut call: impl FnMut(&dyn IEmbeddingProvider) -> FabulaResult<T>,
    ) -> FabulaResult<T> {
        let mut last_error = None;
        let primary_name = self
            .providers
            .first()
            .map(|p| p.name().to_string())
            .unwrap_or_default();

        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match call(provider.as_ref()) {
                Ok(value) => {
                    if i > 0 {
                        self.events.push(DegradationEvent {
                            failed_provider: primary_name.clone(),
                            fallback_used: provider.name().to_string(),
                        });
                    }
                    return Ok(value);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embedding provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::Exhausted {
                tried: self.providers.len(),
            }
            .into()
        }))
    }

    /// Name of the first currently-available provider.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;
    impl IEmbeddingProvider for FailingProvider {
        fn embed(&self, _text: &str) -> FabulaResult<Vec<f32>> {
            Err(EmbeddingError::Provider {
                provider: "failing".to_string(),
                reason: "mock failure".to_string(),
            }
            .into())
        }
        fn embed_batch(&self, _texts: &[String]) -> FabulaResult<Vec<Vec<f32>>> {
            Err(EmbeddingError::Provider {
                provider: "failing".to_string(),
                reason: "mock failure".to_string(),
            }
            .into())
        }
        fn dimensions(&self) -> usize {
            8
        }
        fn name(&self) -> &str {
            "failing"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct ConstantProvider {
        label: &'static str,
    }
    impl IEmbeddingProvider for ConstantProvider {
        fn embed(&self, _text: &str) -> FabulaResult<Vec<f32>> {
            Ok(vec![1.0; 8])
        }
        fn embed_batch(&self, texts: &[String]) -> FabulaResult<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![1.0; 8]).collect())
        }
        fn dimensions(&self) -> usize {
            8
        }
        fn name(&self) -> &str {
            self.label
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn primary_success_records_no_events() {
        let mut chain = FallbackChain::new();
        chain.push(Box::new(ConstantProvider { label: "primary" }));
        chain.push(Box::new(ConstantProvider { label: "backup" }));

        chain.embed("text").unwrap();
        assert!(chain.drain_events().is_empty());
    }

    #[test]
    fn fallback_records_degradation() {
        let mut chain = FallbackChain::new();
        chain.push(Box::new(FailingProvider));
        chain.push(Box::new(ConstantProvider { label: "backup" }));

        chain.embed("text").unwrap();
        let events = chain.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].failed_provider, "failing");
        assert_eq!(events[0].fallback_used, "backup");
    }

    #[test]
    fn all_failing_returns_error() {
        let mut chain = FallbackChain::new();
        chain.push(Box::new(FailingProvider));
        chain.push(Box::new(FailingProvider));

        assert!(chain.embed("text").is_err());
    }

    #[test]
    fn batch_goes_through_chain() {
        let mut chain = FallbackChain::new();
        chain.push(Box::new(FailingProvider));
        chain.push(Box::new(ConstantProvider { label: "backup" }));

        let texts = vec!["a".to_string(), "b".to_string()];
        let vectors = chain.embed_batch(&texts).unwrap();
        assert_eq!(vectors.len(), 2);
    }
}
