//! Blended pair scoring and per-candidate reduction.

use crate::metrics::{
    cosine_similarity_pct, distance_to_confidence, euclidean_distance, ScoreError,
};
use crate::types::{Embedding, PhotoCandidate};

/// Blended match score in [0, 100] for one (query, stored) pair.
///
/// Arithmetic mean of cosine similarity and distance-derived confidence:
/// the two capture different aspects of closeness (angular vs.
/// magnitude-sensitive), and averaging smooths out either metric alone.
/// A failure in either sub-metric fails the whole pair.
pub fn pair_score(query: &Embedding, stored: &Embedding) -> Result<f32, ScoreError> {
    let similarity = cosine_similarity_pct(query, stored)?;
    let confidence = distance_to_confidence(euclidean_distance(query, stored)?);
    Ok((similarity + confidence) / 2.0)
}

/// Strongest pairwise score between the query and any face stored in the
/// candidate photo.
///
/// A photo may contain several people plus noise; it is credited with the
/// strongest evidence of containing the query person, not an average over
/// unrelated faces. Failed pairs are skipped; 0.0 when the candidate has no
/// embeddings or nothing scored.
pub fn best_candidate_score(query: &Embedding, candidate: &PhotoCandidate) -> f32 {
    candidate
        .embeddings
        .iter()
        .filter_map(|stored| pair_score(query, stored).ok())
        .fold(0.0f32, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emb(values: &[f32]) -> Embedding {
        Embedding::new(values.to_vec())
    }

    #[test]
    fn test_pair_score_identical_is_100() {
        let a = emb(&[0.1, 0.2, 0.3, 0.4]);
        assert!((pair_score(&a, &a).unwrap() - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_pair_score_symmetric() {
        let a = emb(&[0.9, 0.1, -0.3]);
        let b = emb(&[0.7, 0.2, 0.1]);
        assert_eq!(pair_score(&a, &b).unwrap(), pair_score(&b, &a).unwrap());
    }

    #[test]
    fn test_pair_score_blends_both_metrics() {
        // b sits at 60° from a (cosine similarity 0.5 → 50%) with its length
        // chosen so the Euclidean distance is 0.9, past the confidence
        // cutoff. Blend: (50 + 0) / 2 = 25.
        let a = emb(&[1.0, 0.0]);
        let b = emb(&[0.372_474_5, 0.645_150_6]);
        let score = pair_score(&a, &b).unwrap();
        assert!((score - 25.0).abs() < 0.05, "got {score}");
    }

    #[test]
    fn test_pair_score_propagates_dimension_mismatch() {
        let a = emb(&[1.0, 0.0]);
        let b = emb(&[1.0, 0.0, 0.0]);
        assert!(matches!(
            pair_score(&a, &b),
            Err(ScoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_best_score_empty_candidate_is_zero() {
        let q = emb(&[1.0, 0.0]);
        let candidate = PhotoCandidate::new("p1", vec![]);
        assert_eq!(best_candidate_score(&q, &candidate), 0.0);
    }

    #[test]
    fn test_best_score_takes_maximum_face() {
        let q = emb(&[1.0, 0.0]);
        let candidate = PhotoCandidate::new(
            "p1",
            vec![
                emb(&[0.0, 1.0]), // stranger
                emb(&[1.0, 0.0]), // the query person
            ],
        );
        let best = best_candidate_score(&q, &candidate);
        assert!((best - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_best_score_skips_failing_pairs() {
        let q = emb(&[1.0, 0.0]);
        let candidate = PhotoCandidate::new(
            "p1",
            vec![
                emb(&[1.0, 0.0, 0.0]), // wrong dimension
                emb(&[0.0, 0.0]),      // degenerate
                emb(&[1.0, 0.0]),      // scores
            ],
        );
        let best = best_candidate_score(&q, &candidate);
        assert!((best - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_best_score_all_pairs_failing_is_zero() {
        let q = emb(&[1.0, 0.0]);
        let candidate = PhotoCandidate::new("p1", vec![emb(&[1.0]), emb(&[0.0, 0.0])]);
        assert_eq!(best_candidate_score(&q, &candidate), 0.0);
    }
}
