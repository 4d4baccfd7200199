//! Embedding provider implementations.

mod hashed;
mod remote;

pub use hashed::HashedProvider;
pub use remote::RemoteProvider;

use fabula_core::config::EmbeddingConfig;
use fabula_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Create the primary provider selected by configuration.
///
/// Unknown selectors fall back to the hashed provider rather than
/// failing: the pipeline must always be able to embed something.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "remote" => match RemoteProvider::new(config.endpoint.clone(), config.dimensions) {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                warn!(error = %e, "remote provider unusable, using hashed");
                Box::new(HashedProvider::new(config.dimensions))
            }
        },
        "hashed" => Box::new(HashedProvider::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown embedding provider, using hashed");
            Box::new(HashedProvider::new(config.dimensions))
        }
    }
}
