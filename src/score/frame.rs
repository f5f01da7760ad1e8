use crate::{
    pose::Pose,
    score::{similarity::SimilarityVector, weights::Weights},
};

/// The composite score for one pair of corresponding poses, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameScore {
    pub score: f64,
    /// Similarity term before the distance penalty.
    pub cos_score: f64,
    /// Distance penalty.
    pub euc_score: f64,
    pub degenerate_keypoints: usize,
}

/// Weighted similarity minus weighted chord distance, floored at zero.
pub(crate) fn frame_score(a: &Pose, b: &Pose, weights: &Weights, weight_sum: f64) -> FrameScore {
    let sims = SimilarityVector::new(a, b);
    let weights = weights.view();

    let cos_score = (sims.values().dot(&weights) / weight_sum).min(1.0);
    let euc_score = (sims.distances().dot(&weights) / weight_sum).min(1.0);

    FrameScore {
        score: (cos_score - euc_score).max(0.0),
        cos_score,
        euc_score,
        degenerate_keypoints: sims.degenerate_count(),
    }
}
