//! Fail-fast consistency checker.
//!
//! A per-backstory state machine: `Pending → Pass | Fail`, terminal on
//! the first transition. The first contradicted claim decides the
//! outcome and later claims are never evaluated.

use fabula_core::errors::{FabulaResult, ReasoningError};
use fabula_core::traits::IContradictionDetector;
use tracing::{debug, info};

/// Checker state. Terminal once it leaves `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Pending,
    Pass,
    Fail,
}

/// Outcome of checking one backstory's claims.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub state: CheckState,
    pub rationale: String,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.state == CheckState::Pass
    }
}

/// Rationale used when every claim clears the detector.
pub const PASS_RATIONALE: &str = "All backstory claims are consistent with the narrative.";

/// Evaluates claims against evidence through a pluggable detection
/// strategy.
pub struct ConsistencyChecker<'a> {
    detector: &'a dyn IContradictionDetector,
}

impl<'a> ConsistencyChecker<'a> {
    pub fn new(detector: &'a dyn IContradictionDetector) -> Self {
        Self { detector }
    }

    /// Evaluate a single claim against its evidence.
    ///
    /// Returns `(consistent, rationale)`. A clean result means "no
    /// contradiction found by the active strategy" — it is not an
    /// assertion that the claim is true.
    pub fn evaluate_claim(&self, claim: &str, evidence: &[String]) -> (bool, String) {
        match self.detector.detect(claim, evidence) {
            Some(contradiction) => (false, contradiction.description),
            None => (true, format!("No contradiction found for claim '{claim}'.")),
        }
    }

    /// Check all claims against their index-aligned evidence sets.
    ///
    /// A length mismatch is a caller defect and fails loudly — silent
    /// truncation would check claims against the wrong evidence. Zero
    /// claims is valid and passes vacuously. Evaluation short-circuits
    /// on the first contradiction.
    pub fn check_consistency(
        &self,
        claims: &[String],
        claim_evidence: &[Vec<String>],
    ) -> FabulaResult<CheckOutcome> {
        if claims.len() != claim_evidence.len() {
            return Err(ReasoningError::Misaligned {
                claims: claims.len(),
                evidence: claim_evidence.len(),
            }
            .into());
        }

        debug!(claims = claims.len(), "checking claim consistency");

        // The state machine is Pending until the first transition;
        // both Pass and Fail are terminal.
        for (claim, evidence) in claims.iter().zip(claim_evidence) {
            let (consistent, rationale) = self.evaluate_claim(claim, evidence);
            if !consistent {
                info!(claim = %claim, "consistency check failed");
                return Ok(CheckOutcome {
                    state: CheckState::Fail,
                    rationale,
                });
            }
        }

        Ok(CheckOutcome {
            state: CheckState::Pass,
            rationale: PASS_RATIONALE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::KeywordDetector;
    use fabula_core::errors::FabulaError;
    use fabula_core::models::Contradiction;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn claims(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn shared_evidence(texts: &[&str], n: usize) -> Vec<Vec<String>> {
        let set: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        vec![set; n]
    }

    #[test]
    fn all_clean_claims_pass_with_generic_rationale() {
        let detector = KeywordDetector::new();
        let checker = ConsistencyChecker::new(&detector);

        let outcome = checker
            .check_consistency(
                &claims(&["He sailed east in spring", "He kept a journal"]),
                &shared_evidence(&["He sailed east", "journals were common"], 2),
            )
            .unwrap();
        assert!(outcome.passed());
        assert_eq!(outcome.rationale, PASS_RATIONALE);
    }

    #[test]
    fn contradiction_fails_with_claim_rationale() {
        let detector = KeywordDetector::new();
        let checker = ConsistencyChecker::new(&detector);

        let outcome = checker
            .check_consistency(
                &claims(&["He never left the island"]),
                &shared_evidence(&["He always left the island each summer"], 1),
            )
            .unwrap();
        assert_eq!(outcome.state, CheckState::Fail);
        assert!(outcome
            .rationale
            .contains("Claim 'He never left the island' contradicted"));
    }

    #[test]
    fn zero_claims_pass_vacuously() {
        let detector = KeywordDetector::new();
        let checker = ConsistencyChecker::new(&detector);

        let outcome = checker.check_consistency(&[], &[]).unwrap();
        assert!(outcome.passed());
    }

    #[test]
    fn misaligned_inputs_fail_loudly() {
        let detector = KeywordDetector::new();
        let checker = ConsistencyChecker::new(&detector);

        let err = checker
            .check_consistency(&claims(&["one claim"]), &[])
            .unwrap_err();
        assert!(matches!(
            err,
            FabulaError::Reasoning(ReasoningError::Misaligned {
                claims: 1,
                evidence: 0
            })
        ));
    }

    /// Detector that counts invocations and flags a chosen claim.
    struct CountingDetector {
        calls: AtomicUsize,
        flag_containing: &'static str,
    }

    impl fabula_core::traits::IContradictionDetector for CountingDetector {
        fn detect(&self, claim: &str, _evidence: &[String]) -> Option<Contradiction> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            claim.contains(self.flag_containing).then(|| Contradiction {
                claim: claim.to_string(),
                description: format!("Claim '{claim}' contradicted by later events."),
                detected_by: "counting".to_string(),
            })
        }
        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn fail_fast_skips_later_claims() {
        let detector = CountingDetector {
            calls: AtomicUsize::new(0),
            flag_containing: "second",
        };
        let checker = ConsistencyChecker::new(&detector);

        let outcome = checker
            .check_consistency(
                &claims(&["the first claim", "the second claim", "the third claim"]),
                &shared_evidence(&["whatever"], 3),
            )
            .unwrap();

        assert_eq!(outcome.state, CheckState::Fail);
        // The third claim must never have been evaluated.
        assert_eq!(detector.calls.load(Ordering::SeqCst), 2);
    }
}
