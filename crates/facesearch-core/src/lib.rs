//! facesearch-core — face embedding match scoring and ranking.
//!
//! Given query face embeddings and candidate photos with stored embeddings,
//! computes a blended match confidence per (query face, photo) pair and
//! produces a threshold-filtered, confidence-ranked report per query face.

pub mod engine;
pub mod metrics;
pub mod observer;
pub mod score;
pub mod store;
pub mod types;

pub use engine::{MatchEngine, DEFAULT_MATCH_THRESHOLD};
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use types::{Embedding, FaceMatches, PhotoCandidate, PhotoMatch, SearchReport};
