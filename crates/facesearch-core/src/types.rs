use serde::{Deserialize, Serialize, Serializer};

/// Face embedding vector, one per detected face.
///
/// The dimension is fixed by the upstream extraction model; the engine only
/// requires that two embeddings being compared agree on length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(values: Vec<f32>) -> Self {
        Self { values }
    }
}

/// A stored photo eligible for matching: its id plus one embedding per face
/// detected at ingestion time. The embedding list may be empty (photo with
/// no faces, or stored before detection ran); such a candidate scores zero
/// matches, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoCandidate {
    pub photo_id: String,
    pub embeddings: Vec<Embedding>,
}

impl PhotoCandidate {
    pub fn new(photo_id: impl Into<String>, embeddings: Vec<Embedding>) -> Self {
        Self {
            photo_id: photo_id.into(),
            embeddings,
        }
    }
}

/// One qualifying photo for one query face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoMatch {
    pub photo_id: String,
    /// Blended match confidence in [0, 100]. Full precision internally;
    /// rounded to 2 decimals only at the serialization boundary.
    #[serde(serialize_with = "round_2dp")]
    pub confidence: f32,
}

/// All qualifying photos for one query face, ranked by confidence descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceMatches {
    pub face_index: usize,
    pub matching_photos: Vec<PhotoMatch>,
    pub match_count: usize,
}

impl FaceMatches {
    pub fn new(face_index: usize, matching_photos: Vec<PhotoMatch>) -> Self {
        let match_count = matching_photos.len();
        Self {
            face_index,
            matching_photos,
            match_count,
        }
    }
}

/// Final output of a search: one [`FaceMatches`] per query embedding, in
/// query order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub face_matches: Vec<FaceMatches>,
    pub total_faces_found: usize,
}

/// Round confidence to 2 decimal places for presentation.
fn round_2dp<S: Serializer>(confidence: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((f64::from(*confidence) * 100.0).round() / 100.0)
}
