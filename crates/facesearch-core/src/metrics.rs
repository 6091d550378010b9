//! Pairwise embedding metrics and confidence calibration.
//!
//! Euclidean distance feeds a piecewise-linear confidence curve calibrated
//! against the shipped embedding model's distance distribution; cosine
//! similarity is scored independently. Both are blended in [`crate::score`].

use crate::types::Embedding;
use thiserror::Error;

// --- Calibration constants ---
// Tied to the embedding model's empirical distance distribution (observed
// range roughly [0, 1.2]). Swapping the extraction model requires
// re-calibrating these.
const MAX_PLAUSIBLE_DISTANCE: f32 = 0.8;
const LIKELY_MATCH_DISTANCE: f32 = 0.6;

/// Per-pair scoring failure. Scoped to one (query, stored) comparison;
/// absorbed by the candidate aggregation, never fatal to a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("zero-magnitude embedding — cosine similarity undefined")]
    DegenerateVector,
}

fn check_dimensions(a: &Embedding, b: &Embedding) -> Result<(), ScoreError> {
    if a.len() != b.len() {
        return Err(ScoreError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Euclidean distance between two embeddings of equal dimension.
pub fn euclidean_distance(a: &Embedding, b: &Embedding) -> Result<f32, ScoreError> {
    check_dimensions(a, b)?;
    let sum: f32 = a
        .values
        .iter()
        .zip(b.values.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum();
    Ok(sum.sqrt())
}

/// Map a face distance to a confidence percentage in [0, 100].
///
/// Smaller distance means higher confidence. The curve is steeper below
/// `LIKELY_MATCH_DISTANCE` and decays linearly to zero at
/// `MAX_PLAUSIBLE_DISTANCE`; branch order matters.
pub fn distance_to_confidence(distance: f32) -> f32 {
    if distance > MAX_PLAUSIBLE_DISTANCE {
        0.0
    } else if distance > LIKELY_MATCH_DISTANCE {
        (MAX_PLAUSIBLE_DISTANCE - distance) / 0.4 * 100.0
    } else {
        ((1.0 - distance) / 0.6 * 100.0).min(100.0)
    }
}

/// Cosine similarity between two embeddings, as a percentage in [0, 100].
///
/// Near-opposite vectors clamp to 0; identical direction yields 100.
/// Zero-magnitude input is undefined and reported as
/// [`ScoreError::DegenerateVector`].
pub fn cosine_similarity_pct(a: &Embedding, b: &Embedding) -> Result<f32, ScoreError> {
    check_dimensions(a, b)?;

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.values.iter().zip(b.values.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return Err(ScoreError::DegenerateVector);
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    Ok((similarity * 100.0).clamp(0.0, 100.0))
}
