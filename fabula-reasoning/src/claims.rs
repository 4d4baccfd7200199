//! Claim extraction.
//!
//! Splits a backstory into sentences on terminating punctuation, then
//! filters out noise and hedged language. Favors precision over
//! recall: a dropped sentence costs little, a speculative "claim"
//! checked as fact costs a wrong verdict.
//!
//! The segmenter is deliberately naive — it will mis-segment
//! abbreviations and decimal numbers. That granularity is what the
//! downstream thresholds were tuned against, so a smarter boundary
//! detector is not a drop-in improvement.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Extract checkable claims from a backstory.
///
/// Whitespace runs are collapsed before segmentation; segments shorter
/// than `min_chars` or containing a case-insensitive hedge marker are
/// dropped. Source order is preserved, nothing is deduplicated, and an
/// empty backstory yields an empty claim list rather than an error.
pub fn extract_claims(backstory: &str, min_chars: usize, hedge_markers: &[String]) -> Vec<String> {
    if backstory.trim().is_empty() {
        return Vec::new();
    }

    let normalized = WHITESPACE_RUNS.replace_all(backstory.trim(), " ");

    let claims: Vec<String> = normalized
        .split(['.', '?', '!'])
        .map(str::trim)
        .filter(|segment| segment.len() >= min_chars)
        .filter(|segment| {
            let lowered = segment.to_lowercase();
            !hedge_markers
                .iter()
                .any(|marker| lowered.contains(&marker.to_lowercase()))
        })
        .map(str::to_string)
        .collect();

    debug!(claims = claims.len(), "extracted claims from backstory");

    claims
}
