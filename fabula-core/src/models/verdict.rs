use serde::{Deserialize, Serialize};

/// Final per-backstory output row: prediction, confidence, rationale.
///
/// Created once by the orchestrator, immutable, terminal (written to
/// the results file and never revisited).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub story_id: String,
    /// 1 = consistent with the narrative, 0 = not.
    pub prediction: u8,
    /// Mean top-K retrieval similarity, rounded to 3 decimal places.
    /// Independent of the contradiction check.
    pub confidence: f64,
    /// Human-readable justification for the prediction.
    pub rationale: String,
}

impl Verdict {
    /// A consistent verdict with evidence-backed confidence.
    ///
    /// Confidence is clamped to [0, 1]: cosine scores can dip below
    /// zero, but a negative confidence is meaningless in the report.
    pub fn consistent(story_id: impl Into<String>, confidence: f64, rationale: String) -> Self {
        Self {
            story_id: story_id.into(),
            prediction: 1,
            confidence: round3(confidence.clamp(0.0, 1.0)),
            rationale,
        }
    }

    /// An inconsistent verdict with evidence-backed confidence.
    pub fn inconsistent(story_id: impl Into<String>, confidence: f64, rationale: String) -> Self {
        Self {
            story_id: story_id.into(),
            prediction: 0,
            confidence: round3(confidence.clamp(0.0, 1.0)),
            rationale,
        }
    }

    /// A degraded verdict: zero confidence, fixed rationale. Used when
    /// the story is unknown or the backstory could not be embedded.
    pub fn degraded(story_id: impl Into<String>, rationale: &str) -> Self {
        Self {
            story_id: story_id.into(),
            prediction: 0,
            confidence: 0.0,
            rationale: rationale.to_string(),
        }
    }
}

/// Round to 3 decimal places, matching the precision of the results file.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round3_truncates_noise() {
        assert_eq!(round3(0.2500000001), 0.25);
        assert_eq!(round3(0.1234), 0.123);
        assert_eq!(round3(0.1235), 0.124);
    }

    #[test]
    fn degraded_verdict_has_zero_confidence() {
        let v = Verdict::degraded("story-1", "no source found");
        assert_eq!(v.prediction, 0);
        assert_eq!(v.confidence, 0.0);
    }

    #[test]
    fn consistent_verdict_rounds_confidence() {
        let v = Verdict::consistent("story-1", 0.33333333, "ok".to_string());
        assert_eq!(v.prediction, 1);
        assert_eq!(v.confidence, 0.333);
    }
}
