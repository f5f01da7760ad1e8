//! Wire shapes shared by every sequence format.
//!
//! These follow the PoseNet keypoint layout, so captures from the detection
//! front-end deserialize without translation. Unknown fields are ignored.

use crate::{
    error::Error,
    pose::{Keypoint, KeypointKind, Pose, PoseSequence, NUM_KEYPOINTS},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct RawPosition {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RawKeypoint {
    #[serde(default)]
    pub(crate) score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) part: Option<KeypointKind>,
    pub(crate) position: RawPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RawPose {
    #[serde(default)]
    pub(crate) score: f64,
    pub(crate) keypoints: Vec<RawKeypoint>,
}

impl RawPose {
    /// Validate into a [`Pose`]. Keypoints without a part name take the kind of their slot.
    pub(crate) fn into_pose(self) -> Result<Pose, Error> {
        if self.keypoints.len() != NUM_KEYPOINTS {
            return Err(Error::MalformedPose {
                expected: NUM_KEYPOINTS,
                got: self.keypoints.len(),
            });
        }
        let keypoints = self
            .keypoints
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let kind = match raw.part {
                    Some(kind) => kind,
                    None => KeypointKind::from_idx(index)?,
                };
                Keypoint::new(kind, raw.position.x, raw.position.y, raw.score)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Pose::new(keypoints, self.score)
    }
}

impl From<&Pose> for RawPose {
    fn from(pose: &Pose) -> Self {
        Self {
            score: pose.score,
            keypoints: pose
                .keypoints()
                .iter()
                .map(|keypoint| RawKeypoint {
                    score: keypoint.score,
                    part: Some(keypoint.kind),
                    position: RawPosition {
                        x: keypoint.point.x(),
                        y: keypoint.point.y(),
                    },
                })
                .collect(),
        }
    }
}

pub(crate) fn into_sequence(poses: Vec<RawPose>) -> Result<PoseSequence, Error> {
    poses.into_iter().map(RawPose::into_pose).collect()
}

pub(crate) fn from_sequence(sequence: &PoseSequence) -> Vec<RawPose> {
    sequence.poses().iter().map(RawPose::from).collect()
}
