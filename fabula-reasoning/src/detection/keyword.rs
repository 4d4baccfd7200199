//! Literal-keyword contradiction heuristic.
//!
//! Triggers when the claim contains "never" and some evidence chunk
//! contains "always", both case-insensitive substring matches. Narrow
//! and explainable by construction — not negation or entailment
//! reasoning. Absence of the pattern means "no contradiction found",
//! never confirmed truth.

use std::sync::LazyLock;

use fabula_core::models::Contradiction;
use fabula_core::traits::IContradictionDetector;
use regex::Regex;
use tracing::debug;

/// Absolute negative language in the claim. Substring semantics, so no
/// word-boundary anchors.
static NEVER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)never").expect("static regex"));

/// Absolute positive language in the evidence.
static ALWAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)always").expect("static regex"));

/// The default detection strategy: absolute-statement keyword conflict.
#[derive(Debug, Default)]
pub struct KeywordDetector;

impl KeywordDetector {
    pub fn new() -> Self {
        Self
    }
}

impl IContradictionDetector for KeywordDetector {
    fn detect(&self, claim: &str, evidence: &[String]) -> Option<Contradiction> {
        if !NEVER_RE.is_match(claim) {
            return None;
        }

        let conflicting = evidence.iter().find(|chunk| ALWAYS_RE.is_match(chunk))?;

        debug!(
            claim = %claim,
            evidence_chars = conflicting.len(),
            "absolute statement conflict detected"
        );

        Some(Contradiction {
            claim: claim.to_string(),
            description: format!("Claim '{claim}' contradicted by later events."),
            detected_by: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "keyword-absolute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn never_vs_always_is_a_contradiction() {
        let detector = KeywordDetector::new();
        let found = detector.detect(
            "He never spoke of the war",
            &evidence(&["He always spoke of the war at supper"]),
        );
        assert!(found.is_some());
        let c = found.unwrap();
        assert!(c.description.contains("contradicted by later events"));
        assert_eq!(c.detected_by, "keyword-absolute");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let detector = KeywordDetector::new();
        assert!(detector
            .detect(
                "She NEVER returned home",
                &evidence(&["she ALWAYS returned before dark"]),
            )
            .is_some());
    }

    #[test]
    fn substring_semantics_not_word_boundary() {
        // "nevertheless" contains "never"; the heuristic is documented
        // as a literal substring check.
        let detector = KeywordDetector::new();
        assert!(detector
            .detect(
                "Nevertheless he stayed",
                &evidence(&["he always wandered"]),
            )
            .is_some());
    }

    #[test]
    fn no_never_in_claim_is_no_contradiction() {
        let detector = KeywordDetector::new();
        assert!(detector
            .detect(
                "He spoke of the war often",
                &evidence(&["He always spoke of the war"]),
            )
            .is_none());
    }

    #[test]
    fn no_always_in_evidence_is_no_contradiction() {
        let detector = KeywordDetector::new();
        assert!(detector
            .detect(
                "He never spoke of the war",
                &evidence(&["He sometimes mentioned the war"]),
            )
            .is_none());
    }

    #[test]
    fn empty_evidence_is_no_contradiction() {
        let detector = KeywordDetector::new();
        assert!(detector.detect("He never spoke of the war", &[]).is_none());
    }
}
