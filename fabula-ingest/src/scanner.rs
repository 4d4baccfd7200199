//! Narrative source scanning.
//!
//! Walks a directory of plain-text novels and yields
//! `(story_id, raw_text)` pairs. The story identifier is the file's
//! base name with the extension stripped, independent of the OS path
//! separator.

use std::path::Path;

use fabula_core::errors::{FabulaResult, IngestError};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Read every regular file under `dir` as one narrative.
///
/// Classic texts often carry odd encodings, so non-UTF-8 bytes are
/// replaced lossily instead of failing the run. A directory or file
/// access error is fatal: evaluation must not start against a partial
/// corpus. Results are sorted by `story_id` for a stable index layout.
pub fn scan_novels(dir: &Path) -> FabulaResult<Vec<(String, String)>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryAccess {
            path: dir.display().to_string(),
            reason: "not a directory".to_string(),
        }
        .into());
    }

    let mut novels = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| IngestError::DirectoryAccess {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping file with unusable name");
            continue;
        };

        let bytes = std::fs::read(path).map_err(|e| IngestError::SourceRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        novels.push((stem.to_string(), text));
    }

    novels.sort_by(|a, b| a.0.cmp(&b.0));

    info!(
        dir = %dir.display(),
        novels = novels.len(),
        "scanned narrative sources"
    );

    Ok(novels)
}
