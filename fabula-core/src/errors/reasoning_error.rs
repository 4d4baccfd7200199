/// Reasoning subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ReasoningError {
    /// Claims and evidence sequences must be index-aligned. A mismatch
    /// is a caller defect, never silently truncated.
    #[error("claims/evidence misaligned: {claims} claims vs {evidence} evidence sets")]
    Misaligned { claims: usize, evidence: usize },
}
