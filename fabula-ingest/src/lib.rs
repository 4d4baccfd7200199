//! # fabula-ingest
//!
//! Turns a directory of novels into ordered, fixed-size word chunks.
//! Eager and pull-based: the whole corpus is scanned and chunked before
//! any backstory is evaluated.

pub mod chunker;
pub mod scanner;

pub use chunker::chunk;
pub use scanner::scan_novels;
