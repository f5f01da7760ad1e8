use crate::{
    error::Error,
    pose::Pose,
    result::Percentage,
    score::{frame::FrameScore, Scorer},
};
use num_traits::ToPrimitive;
use std::{iter::Zip, slice::Iter};

/// Frame scores for two sequences walked in lockstep.
///
/// Stops at the end of the shorter sequence.
pub struct FrameScores<'a> {
    scorer: &'a Scorer,
    pairs: Zip<Iter<'a, Pose>, Iter<'a, Pose>>,
}

impl<'a> FrameScores<'a> {
    pub(crate) fn new(scorer: &'a Scorer, a: &'a [Pose], b: &'a [Pose]) -> Self {
        Self {
            scorer,
            pairs: a.iter().zip(b.iter()),
        }
    }
}

impl Iterator for FrameScores<'_> {
    type Item = FrameScore;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b) = self.pairs.next()?;
        Some(self.scorer.frame_score(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for FrameScores<'_> {}

/// Per-frame scores reduced to one overall percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub overall: Percentage,
    pub frame_scores: Vec<f64>,
    /// Keypoint pairs that fell back to zero similarity, summed over all frames.
    pub degenerate_keypoints: usize,
}

impl Aggregate {
    pub fn from_frames<I>(frames: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = FrameScore>,
    {
        let mut frame_scores = Vec::new();
        let mut degenerate_keypoints = 0;

        for frame in frames {
            frame_scores.push(frame.score);
            degenerate_keypoints += frame.degenerate_keypoints;
        }

        if frame_scores.is_empty() {
            return Err(Error::EmptyInput);
        }

        let count = frame_scores.len().to_f64().ok_or(Error::ConvertToF64)?;
        let mean = frame_scores.iter().sum::<f64>() / count;

        Ok(Self {
            overall: Percentage::from_fraction(mean),
            frame_scores,
            degenerate_keypoints,
        })
    }
}
