//! # fabula-retrieval
//!
//! Ranks a story's chunks against a backstory query vector by cosine
//! similarity and returns the top K as evidence.

pub mod retriever;
pub mod similarity;

pub use retriever::Retriever;
