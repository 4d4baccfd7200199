use crate::models::Contradiction;

/// Contradiction detection strategy.
///
/// The consistency checker treats this as a pluggable seam: the default
/// implementation is a narrow literal-keyword heuristic, but a richer
/// entailment model can be dropped in without touching orchestration.
///
/// A `None` result means "no contradiction found by this strategy",
/// never confirmed truth — detectors report conflict signals only.
pub trait IContradictionDetector: Send + Sync {
    /// Check one claim against its evidence chunks.
    fn detect(&self, claim: &str, evidence: &[String]) -> Option<Contradiction>;

    /// Strategy name, recorded on each finding.
    fn name(&self) -> &str;
}
