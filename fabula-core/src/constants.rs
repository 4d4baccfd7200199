//! Default values for the pipeline configuration.
//!
//! All tunables live here so a config review never has to chase
//! magic numbers through the subsystem crates.

/// Words per narrative chunk. Smaller windows localize evidence more
/// precisely but inflate the index; larger windows keep more context
/// per chunk.
pub const DEFAULT_WINDOW_SIZE: usize = 400;

/// Number of evidence chunks retrieved per backstory.
pub const DEFAULT_TOP_K: usize = 5;

/// Mean top-K similarity at or above which a non-contradicted
/// backstory is predicted consistent. Inclusive boundary.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.25;

/// Segments shorter than this (in characters) are dropped as noise
/// during claim extraction.
pub const DEFAULT_MIN_CLAIM_CHARS: usize = 20;

/// Case-insensitive markers for hedged or speculative language.
/// Segments containing one are not checkable claims.
pub const DEFAULT_HEDGE_MARKERS: &[&str] = &["perhaps", "might", "it seems"];

/// Dimensionality of the default hashed embedding provider.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Chunk texts embedded per provider call during index construction.
/// Performance knob only; must not change chunk-to-vector assignment.
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;

/// Max entries in the in-memory embedding cache.
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;

/// Characters of the top evidence chunk quoted in a consistent verdict.
pub const RATIONALE_SNIPPET_CHARS: usize = 150;
