/// Orchestration and tabular I/O errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read evaluation cases from '{path}': {reason}")]
    CaseRead { path: String, reason: String },

    #[error("failed to write results to '{path}': {reason}")]
    ReportWrite { path: String, reason: String },
}
