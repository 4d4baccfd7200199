//! Contradiction detection strategies.
//!
//! One strategy today: the literal-keyword heuristic. The trait seam
//! exists so a real entailment model can replace it without touching
//! the checker or the orchestrator.

mod keyword;

pub use keyword::KeywordDetector;
