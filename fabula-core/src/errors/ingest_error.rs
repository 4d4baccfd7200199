/// Narrative ingestion errors.
///
/// A source read failure is fatal: evaluation never starts against a
/// partial narrative corpus.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read narrative source '{path}': {reason}")]
    SourceRead { path: String, reason: String },

    #[error("narrative directory '{path}' is not accessible: {reason}")]
    DirectoryAccess { path: String, reason: String },
}
