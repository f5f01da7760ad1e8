pub mod codec;
pub mod error;
pub mod point;
pub mod pose;
pub mod result;
pub mod score;

pub use error::Error;
pub use pose::{Keypoint, KeypointKind, Pose, PoseSequence, NUM_KEYPOINTS};
pub use result::{ComparisonResult, Highlight, Highlights, Percentage};
pub use score::Scorer;
