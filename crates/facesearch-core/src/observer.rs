//! Injected observability hooks.
//!
//! The engine and store decode report progress through a [`SearchObserver`]
//! instead of a global logger, so callers choose where events go and tests
//! run without capturing output.

use crate::store::DecodeError;

/// Receives search progress events. All hooks default to no-ops.
pub trait SearchObserver {
    /// Fired once per query embedding, after filtering and ranking.
    fn query_scored(&self, face_index: usize, match_count: usize) {
        let _ = (face_index, match_count);
    }

    /// Fired when a persisted photo record fails to decode. The candidate
    /// is kept with zero embeddings; the search continues.
    fn candidate_decode_failed(&self, photo_id: &str, error: &DecodeError) {
        let _ = (photo_id, error);
    }
}

/// Observer that discards every event.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that mirrors events to `tracing`.
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn query_scored(&self, face_index: usize, match_count: usize) {
        tracing::info!(face_index, match_count, "query face scored");
    }

    fn candidate_decode_failed(&self, photo_id: &str, error: &DecodeError) {
        tracing::error!(photo_id, error = %error, "invalid stored face data; treating photo as faceless");
    }
}
