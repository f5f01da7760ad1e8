use crate::{
    error::Error,
    pose::{Pose, PoseSequence},
    result::{ComparisonResult, Highlights},
};

mod extremes;
mod frame;
mod highlights;
mod sequence;
mod similarity;
mod weights;

pub use frame::FrameScore;
pub use sequence::{Aggregate, FrameScores};
pub use similarity::{
    direction, keypoint_similarity, try_keypoint_similarity, SimilarityVector,
    DEGENERATE_SIMILARITY,
};
pub use weights::Weights;

use weights::DEFAULT_WEIGHTS;

pub(crate) const DEFAULT_WEIGHT_SUM: &str = "40";
pub(crate) const DEFAULT_SAMPLE_RATE: &str = "50";

/// Scoring configuration. Immutable once built and shared across comparisons.
#[derive(Debug, Clone, PartialEq, structopt::StructOpt)]
pub struct Scorer {
    /// Comma separated per-keypoint weights in keypoint order.
    #[structopt(long, default_value = DEFAULT_WEIGHTS)]
    pub weights: Weights,

    /// Normalizer for weighted sums.
    ///
    /// The default differs from the sum of the default weights (41); changing it
    /// rescales every score.
    #[structopt(long, default_value = DEFAULT_WEIGHT_SUM)]
    pub weight_sum: f64,

    /// Frames per second of the captured sequences.
    #[structopt(short = "-r", long, default_value = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            weight_sum: DEFAULT_WEIGHT_SUM.parse().unwrap(),
            sample_rate: DEFAULT_SAMPLE_RATE.parse().unwrap(),
        }
    }
}

impl Scorer {
    pub fn new(weights: Weights, weight_sum: f64, sample_rate: f64) -> Result<Self, Error> {
        let scorer = Self {
            weights,
            weight_sum,
            sample_rate,
        };
        scorer.validate()?;
        Ok(scorer)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.weight_sum.is_finite() && self.weight_sum > 0.0) {
            return Err(Error::InvalidWeightSum(self.weight_sum));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }

    pub fn frame_score(&self, a: &Pose, b: &Pose) -> FrameScore {
        frame::frame_score(a, b, &self.weights, self.weight_sum)
    }

    /// Lazily score `a` against `b`, frame by frame, up to the shorter length.
    pub fn frames<'a>(
        &'a self,
        a: &'a PoseSequence,
        b: &'a PoseSequence,
    ) -> Result<FrameScores<'a>, Error> {
        self.validate()?;
        if a.is_empty() || b.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(FrameScores::new(self, a.poses(), b.poses()))
    }

    pub fn aggregate(&self, a: &PoseSequence, b: &PoseSequence) -> Result<Aggregate, Error> {
        Aggregate::from_frames(self.frames(a, b)?)
    }

    pub fn highlights(&self, frame_scores: &[f64]) -> Result<Highlights, Error> {
        self.validate()?;
        highlights::extract_highlights(frame_scores, self.sample_rate)
    }

    pub fn summarize(&self, aggregate: &Aggregate) -> Result<ComparisonResult, Error> {
        Ok(ComparisonResult {
            score: aggregate.overall,
            highlights: self.highlights(&aggregate.frame_scores)?,
        })
    }

    /// Compare two pose sequences.
    pub fn compare(&self, a: &PoseSequence, b: &PoseSequence) -> Result<ComparisonResult, Error> {
        self.summarize(&self.aggregate(a, b)?)
    }
}
