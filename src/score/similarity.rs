use crate::{
    error::Error,
    point::Point,
    pose::{Keypoint, Pose, NUM_KEYPOINTS},
};
use bitvec::{bitvec, vec::BitVec};
use ndarray::Array1;

/// Similarity assigned to a keypoint pair when either side has no direction.
pub const DEGENERATE_SIMILARITY: f64 = 0.0;

/// Map a keypoint to `(x²/n, y²/n)` where `n` is its distance from the origin.
///
/// This is not unit normalization: coordinates are squared before dividing by
/// the unsquared norm, so the sign of each coordinate is discarded.
pub fn direction(keypoint: &Keypoint) -> Result<Point, Error> {
    let (x, y) = (keypoint.point.x(), keypoint.point.y());
    let norm = keypoint.point.norm();
    if norm == 0.0 {
        return Err(Error::DegenerateKeypoint(keypoint.kind));
    }
    // |x / norm| <= 1, so neither component overflows or underflows to zero
    Point::new(x * (x / norm), y * (y / norm))
}

/// Cosine similarity of the two transformed keypoints, clamped to at most one.
pub fn try_keypoint_similarity(a: &Keypoint, b: &Keypoint) -> Result<f64, Error> {
    let (da, db) = (direction(a)?, direction(b)?);
    let cosine = da.cosine(db).ok_or_else(|| {
        let kind = if da.norm() == 0.0 { a.kind } else { b.kind };
        Error::DegenerateKeypoint(kind)
    })?;
    Ok(cosine.min(1.0))
}

/// Like [`try_keypoint_similarity`], falling back to [`DEGENERATE_SIMILARITY`].
pub fn keypoint_similarity(a: &Keypoint, b: &Keypoint) -> f64 {
    try_keypoint_similarity(a, b).unwrap_or(DEGENERATE_SIMILARITY)
}

/// Per-keypoint similarities for one pair of poses.
#[derive(Debug, Clone)]
pub struct SimilarityVector {
    values: Array1<f64>,
    degenerate: BitVec,
}

impl SimilarityVector {
    pub fn new(a: &Pose, b: &Pose) -> Self {
        let mut values = Array1::zeros(NUM_KEYPOINTS);
        let mut degenerate = bitvec![0; NUM_KEYPOINTS];

        for (i, (ka, kb)) in a.keypoints().iter().zip(b.keypoints().iter()).enumerate() {
            values[i] = match try_keypoint_similarity(ka, kb) {
                Ok(similarity) => similarity,
                Err(Error::DegenerateKeypoint(_)) => {
                    degenerate.set(i, true);
                    DEGENERATE_SIMILARITY
                }
                Err(_) => DEGENERATE_SIMILARITY,
            };
        }

        Self { values, degenerate }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Chord length between two unit-circle points whose angle has cosine `sim`.
    pub fn distances(&self) -> Array1<f64> {
        self.values.mapv(|sim| (2.0 * (1.0 - sim)).sqrt())
    }

    /// Number of keypoint pairs that fell back to [`DEGENERATE_SIMILARITY`].
    pub fn degenerate_count(&self) -> usize {
        self.degenerate.count_ones()
    }

    pub fn is_degenerate(&self, index: usize) -> bool {
        self.degenerate.get(index).map_or(false, |bit| *bit)
    }
}
