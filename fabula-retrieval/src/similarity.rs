//! Cosine similarity with explicit normalization.
//!
//! The retriever normalizes both sides itself rather than assuming the
//! embedding source emits unit vectors; if upstream normalization
//! behavior ever changes, scores here stay correct.

/// L2 norm of a vector.
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter().map(|&x| (x as f64) * (x as f64)).sum::<f64>().sqrt()
}

/// Cosine similarity between two vectors.
///
/// A zero-magnitude candidate scores 0.0 (no direction, no similarity).
/// Callers must reject zero-magnitude queries before scoring; see
/// [`crate::retriever::Retriever::retrieve`].
pub fn cosine(query: &[f32], candidate: &[f32]) -> f64 {
    // The embedding engine enforces a uniform vector width, so a
    // mismatch here is a programming defect, not a data condition.
    debug_assert_eq!(query.len(), candidate.len(), "vector width mismatch");

    let nq = l2_norm(query);
    let nc = l2_norm(candidate);
    if nq == 0.0 || nc == 0.0 {
        return 0.0;
    }

    let dot: f64 = query
        .iter()
        .zip(candidate)
        .map(|(&a, &b)| (a as f64) * (b as f64))
        .sum();

    dot / (nq * nc)
}
