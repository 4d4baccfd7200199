//! Property tests for the chunker.
//!
//! The load-bearing invariant: chunking is an idempotent partition of
//! the token sequence, modulo whitespace normalization.

use fabula_ingest::chunk;
use proptest::prelude::*;

proptest! {
    /// Concatenating all chunks by ordinal and re-splitting on
    /// whitespace reproduces the original token sequence exactly.
    #[test]
    fn chunks_cover_token_sequence(
        text in "[a-zA-Z0-9 \t\n]{0,500}",
        window in 1usize..50,
    ) {
        let original: Vec<&str> = text.split_whitespace().collect();

        let chunks = chunk("story", &text, window);
        let rejoined = chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let recovered: Vec<&str> = rejoined.split_whitespace().collect();

        prop_assert_eq!(original, recovered);
    }

    /// Every window except the last holds exactly `window` tokens, and
    /// the last holds at least one.
    #[test]
    fn window_sizes_are_exact_except_last(
        text in "[a-z ]{0,300}",
        window in 1usize..20,
    ) {
        let chunks = chunk("story", &text, window);
        for (i, c) in chunks.iter().enumerate() {
            let tokens = c.text.split_whitespace().count();
            if i + 1 < chunks.len() {
                prop_assert_eq!(tokens, window);
            } else {
                prop_assert!(tokens >= 1 && tokens <= window);
            }
        }
    }

    /// Ordinals are contiguous from zero in emission order.
    #[test]
    fn ordinals_are_contiguous(
        text in "[a-z ]{0,300}",
        window in 1usize..20,
    ) {
        let chunks = chunk("story", &text, window);
        for (i, c) in chunks.iter().enumerate() {
            prop_assert_eq!(c.ordinal, i);
        }
    }
}
