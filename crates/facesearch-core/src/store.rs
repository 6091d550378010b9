//! Decoding of persisted photo rows into scoring candidates.
//!
//! Ingestion stores each photo's face embeddings as a JSON array of arrays
//! of numbers in a text column. A row that fails to parse must degrade that
//! one photo, never the batch.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observer::SearchObserver;
use crate::types::{Embedding, PhotoCandidate};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid stored face data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Raw persisted row: a photo id and its face embeddings as stored JSON
/// text, if any were recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPhotoRecord {
    pub photo_id: String,
    pub face_encodings: Option<String>,
}

/// Decode stored rows into candidates, preserving row order.
///
/// Rows with no encodings, or with encodings that fail to parse, become
/// candidates with zero embeddings; parse failures are surfaced to the
/// observer and the batch continues.
pub fn decode_candidates(
    records: &[StoredPhotoRecord],
    observer: &dyn SearchObserver,
) -> Vec<PhotoCandidate> {
    records
        .iter()
        .map(|record| {
            let embeddings = match record.face_encodings.as_deref() {
                None => Vec::new(),
                Some(raw) => match serde_json::from_str::<Vec<Embedding>>(raw) {
                    Ok(embeddings) => embeddings,
                    Err(err) => {
                        observer
                            .candidate_decode_failed(&record.photo_id, &DecodeError::Malformed(err));
                        Vec::new()
                    }
                },
            };
            PhotoCandidate::new(record.photo_id.clone(), embeddings)
        })
        .collect()
}
