//! Tabular I/O: evaluation cases in, verdict rows out.
//!
//! Results are written only after every record has been processed, so
//! a mid-run failure never leaves a partial results file behind.

use std::path::Path;

use fabula_core::errors::{FabulaResult, PipelineError};
use fabula_core::models::Verdict;
use serde::Deserialize;
use tracing::info;

/// One evaluation record: a backstory to verify against its story.
#[derive(Debug, Clone, Deserialize)]
pub struct BackstoryCase {
    pub story_id: String,
    pub backstory: String,
}

/// Load all evaluation cases from a CSV file with `story_id` and
/// `backstory` columns.
pub fn load_cases(path: &Path) -> FabulaResult<Vec<BackstoryCase>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| PipelineError::CaseRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut cases = Vec::new();
    for record in reader.deserialize() {
        let case: BackstoryCase = record.map_err(|e| PipelineError::CaseRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        cases.push(case);
    }

    info!(path = %path.display(), cases = cases.len(), "loaded evaluation cases");

    Ok(cases)
}

/// Write all verdicts as CSV rows: `story_id, prediction, confidence,
/// rationale`. One row per input case, in input order.
pub fn write_verdicts(path: &Path, verdicts: &[Verdict]) -> FabulaResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| PipelineError::ReportWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    for verdict in verdicts {
        writer
            .serialize(verdict)
            .map_err(|e| PipelineError::ReportWrite {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
    }

    writer.flush().map_err(|e| PipelineError::ReportWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), rows = verdicts.len(), "wrote results");

    Ok(())
}
