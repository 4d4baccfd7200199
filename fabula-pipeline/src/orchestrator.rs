//! Per-backstory evaluation sequencing.
//!
//! For each record: scope to the story's chunks, embed the backstory,
//! retrieve top-K evidence, extract claims, check consistency, and
//! assemble the verdict. The index is read-only by the time the
//! orchestrator sees it, so every evaluation is independent.

use fabula_core::config::PipelineConfig;
use fabula_core::constants::RATIONALE_SNIPPET_CHARS;
use fabula_core::errors::{FabulaError, FabulaResult, RetrievalError};
use fabula_core::models::{round3, RetrievalResult, Verdict};
use fabula_core::traits::IContradictionDetector;
use fabula_embeddings::{ChunkIndex, EmbeddingEngine};
use fabula_reasoning::{extract_claims, ConsistencyChecker};
use fabula_retrieval::Retriever;
use tracing::{info, warn};

/// Rationale for a story with no chunks in the index.
pub const NO_SOURCE_RATIONALE: &str =
    "No narrative source was found for the given story identifier.";

/// Rationale when the backstory itself cannot be embedded.
pub const EMBED_FAILED_RATIONALE: &str = "Backstory embedding failed due to encoding issues.";

/// Rationale for a clean backstory whose evidence similarity is too low.
pub const BELOW_THRESHOLD_RATIONALE: &str =
    "No sufficiently similar narrative evidence was found to support the backstory.";

/// Sequences one full evaluation per backstory record.
pub struct Orchestrator<'a> {
    index: &'a ChunkIndex,
    engine: &'a mut EmbeddingEngine,
    detector: &'a dyn IContradictionDetector,
    config: &'a PipelineConfig,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        index: &'a ChunkIndex,
        engine: &'a mut EmbeddingEngine,
        detector: &'a dyn IContradictionDetector,
        config: &'a PipelineConfig,
    ) -> Self {
        Self {
            index,
            engine,
            detector,
            config,
        }
    }

    /// Evaluate every case in order, one verdict per case.
    ///
    /// Per-record embedding failures degrade to zero-confidence
    /// verdicts and the run continues. Only programming defects
    /// (claims/evidence misalignment) propagate as errors.
    pub fn run(&mut self, cases: &[crate::cases::BackstoryCase]) -> FabulaResult<Vec<Verdict>> {
        let mut verdicts = Vec::with_capacity(cases.len());
        for case in cases {
            info!(story_id = %case.story_id, "evaluating backstory");
            verdicts.push(self.evaluate(&case.story_id, &case.backstory)?);
        }
        Ok(verdicts)
    }

    /// Evaluate a single backstory against its story's narrative.
    pub fn evaluate(&mut self, story_id: &str, backstory: &str) -> FabulaResult<Verdict> {
        // Unknown story: fail safely before spending an embedding call.
        if !self.index.has_story(story_id) {
            warn!(story_id, "no narrative chunks for story");
            return Ok(Verdict::degraded(story_id, NO_SOURCE_RATIONALE));
        }

        // Embed the backstory once; failure degrades this record only.
        let query = match self.engine.embed_query(backstory) {
            Ok(query) => query,
            Err(e) => {
                warn!(story_id, error = %e, "backstory embedding failed");
                return Ok(Verdict::degraded(story_id, EMBED_FAILED_RATIONALE));
            }
        };

        let evidence = match Retriever::new(self.index).retrieve(story_id, &query, self.config.top_k)
        {
            Ok(result) => result,
            // An unembeddable backstory (all terms hash away) surfaces
            // here as a zero-magnitude query. Same degradation as an
            // embedding failure; the run continues.
            Err(FabulaError::Retrieval(RetrievalError::EmptyQuery)) => {
                warn!(story_id, "backstory produced a zero-magnitude query vector");
                return Ok(Verdict::degraded(story_id, EMBED_FAILED_RATIONALE));
            }
            Err(e) => return Err(e),
        };

        let claims = extract_claims(
            backstory,
            self.config.min_claim_chars,
            &self.config.hedge_markers,
        );

        // Every claim shares the backstory-level evidence set; evidence
        // is not re-retrieved per claim.
        let evidence_texts = evidence.evidence_texts();
        let claim_evidence: Vec<Vec<String>> = vec![evidence_texts; claims.len()];

        let checker = ConsistencyChecker::new(self.detector);
        let outcome = checker.check_consistency(&claims, &claim_evidence)?;

        let mean = evidence.mean_score();

        if !outcome.passed() {
            return Ok(Verdict::inconsistent(story_id, mean, outcome.rationale));
        }

        if mean >= self.config.similarity_threshold {
            Ok(Verdict::consistent(
                story_id,
                mean,
                evidence_rationale(&evidence),
            ))
        } else {
            Ok(Verdict::inconsistent(
                story_id,
                mean,
                BELOW_THRESHOLD_RATIONALE.to_string(),
            ))
        }
    }
}

/// Build the consistent-verdict rationale: a snippet of the top
/// evidence chunk and its similarity, so the output shows what matched.
fn evidence_rationale(evidence: &RetrievalResult) -> String {
    match evidence.top() {
        Some(top) => {
            let snippet: String = top
                .text
                .chars()
                .take(RATIONALE_SNIPPET_CHARS)
                .collect::<String>()
                .replace('\n', " ")
                .trim()
                .to_string();
            format!(
                "Found matching evidence: '{snippet}...' (Sim: {})",
                round3(top.score)
            )
        }
        // Unreachable in practice: a consistent verdict implies hits.
        None => BELOW_THRESHOLD_RATIONALE.to_string(),
    }
}
