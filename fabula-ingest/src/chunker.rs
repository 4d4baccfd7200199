//! Fixed-window word chunking.
//!
//! Word-based rather than character-based: word windows behave more
//! predictably under embedding than arbitrary byte slices.

use fabula_core::models::Chunk;
use tracing::debug;

/// Split `text` into contiguous windows of `window_size` whitespace
/// tokens, re-joined with single spaces.
///
/// The final window may be shorter. Original inter-word whitespace
/// (tabs, runs of spaces, newlines) is not preserved — this is a lossy
/// normalization. Empty input yields an empty chunk sequence, not an
/// error. Ordinals are assigned 0-based in emission order.
///
/// `window_size` must be positive; a zero window is a caller defect.
pub fn chunk(story_id: &str, text: &str, window_size: usize) -> Vec<Chunk> {
    assert!(window_size > 0, "window_size must be positive");

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let chunks: Vec<Chunk> = words
        .chunks(window_size)
        .enumerate()
        .map(|(ordinal, window)| Chunk::new(story_id, ordinal, window.join(" ")))
        .collect();

    debug!(
        story_id,
        words = words.len(),
        chunks = chunks.len(),
        window_size,
        "chunked narrative"
    );

    chunks
}
