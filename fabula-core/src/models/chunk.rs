use serde::{Deserialize, Serialize};

/// A fixed-size contiguous word window from one narrative, tagged with
/// its source story and position.
///
/// Immutable once created. `(story_id, ordinal)` is unique; the chunk
/// index owns all chunks for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier of the source narrative (file stem of the novel).
    pub story_id: String,
    /// 0-based, contiguous position of this window within its source.
    pub ordinal: usize,
    /// Window text, tokens re-joined with single spaces.
    pub text: String,
}

impl Chunk {
    pub fn new(story_id: impl Into<String>, ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            story_id: story_id.into(),
            ordinal,
            text: text.into(),
        }
    }
}
