//! Threshold-filtered, confidence-ranked face search.

use crate::observer::{NoopObserver, SearchObserver};
use crate::score::best_candidate_score;
use crate::types::{Embedding, FaceMatches, PhotoCandidate, PhotoMatch, SearchReport};

/// Minimum blended confidence for a candidate photo to be reported.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 90.0;

/// Scores query faces against candidate photos and ranks the survivors.
///
/// Pure and stateless: identical inputs always produce an identical report.
/// Bad candidate data degrades that candidate, never the search.
pub struct MatchEngine {
    threshold: f32,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl MatchEngine {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Search without observation. See [`search_with_observer`](Self::search_with_observer).
    pub fn search(&self, queries: &[Embedding], candidates: &[PhotoCandidate]) -> SearchReport {
        self.search_with_observer(queries, candidates, &NoopObserver)
    }

    /// For every query embedding, in order: score each candidate with its
    /// best per-face match, keep candidates at or above the threshold, and
    /// rank them by confidence descending (ties keep candidate order).
    ///
    /// An empty query sequence yields an empty report; an empty candidate
    /// sequence yields zero matches per query. Neither is an error.
    pub fn search_with_observer(
        &self,
        queries: &[Embedding],
        candidates: &[PhotoCandidate],
        observer: &dyn SearchObserver,
    ) -> SearchReport {
        let face_matches = queries
            .iter()
            .enumerate()
            .map(|(face_index, query)| {
                let mut matching: Vec<PhotoMatch> = candidates
                    .iter()
                    .filter_map(|candidate| {
                        let confidence = best_candidate_score(query, candidate);
                        (confidence >= self.threshold).then(|| PhotoMatch {
                            photo_id: candidate.photo_id.clone(),
                            confidence,
                        })
                    })
                    .collect();

                // sort_by is stable, so equal confidences keep candidate order.
                matching.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

                observer.query_scored(face_index, matching.len());
                FaceMatches::new(face_index, matching)
            })
            .collect();

        SearchReport {
            face_matches,
            total_faces_found: queries.len(),
        }
    }
}
