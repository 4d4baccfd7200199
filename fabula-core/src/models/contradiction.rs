use serde::{Deserialize, Serialize};

/// A detected conflict between a backstory claim and retrieved evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contradiction {
    /// The claim that conflicts with the narrative.
    pub claim: String,
    /// Human-readable description, used verbatim as the verdict rationale.
    pub description: String,
    /// Name of the detection strategy that found the conflict.
    pub detected_by: String,
}
