use crate::{error::Error, point::Point};
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum KeypointKind {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl KeypointKind {
    pub fn idx(self) -> Result<usize, Error> {
        self.to_usize().ok_or(Error::KeypointVariantToUSize(self))
    }

    pub fn from_idx(index: usize) -> Result<Self, Error> {
        Self::from_usize(index).ok_or(Error::ConvertUSizeToKeypointKind(index))
    }
}

pub const NUM_KEYPOINTS: usize = 17;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Keypoint {
    pub kind: KeypointKind,
    pub point: Point,
    pub score: f64,
}

impl Keypoint {
    pub fn new(kind: KeypointKind, x: f64, y: f64, score: f64) -> Result<Self, Error> {
        Ok(Self {
            kind,
            point: Point::new(x, y)?,
            score,
        })
    }
}

pub type Keypoints = [Keypoint; NUM_KEYPOINTS];

/// One detected body configuration at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    keypoints: Keypoints,
    pub score: f64,
}

impl Pose {
    /// Build a pose from keypoints in canonical order.
    ///
    /// Fails when the count is not [`NUM_KEYPOINTS`] or when a keypoint sits in
    /// the slot of a different body part.
    pub fn new(keypoints: Vec<Keypoint>, score: f64) -> Result<Self, Error> {
        let got = keypoints.len();
        let keypoints = Keypoints::try_from(keypoints).map_err(|_| Error::MalformedPose {
            expected: NUM_KEYPOINTS,
            got,
        })?;
        for (index, keypoint) in keypoints.iter().enumerate() {
            let expected = KeypointKind::from_idx(index)?;
            if keypoint.kind != expected {
                return Err(Error::MisplacedKeypoint {
                    index,
                    expected,
                    got: keypoint.kind,
                });
            }
        }
        Ok(Self { keypoints, score })
    }

    pub fn keypoints(&self) -> &Keypoints {
        &self.keypoints
    }
}

/// Poses sampled at a fixed rate, one per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseSequence(Vec<Pose>);

impl PoseSequence {
    pub fn new(poses: Vec<Pose>) -> Self {
        Self(poses)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn poses(&self) -> &[Pose] {
        &self.0
    }

    /// Keep at most `max_frames` leading poses.
    pub fn truncated(mut self, max_frames: usize) -> Self {
        self.0.truncate(max_frames);
        self
    }
}

impl From<Vec<Pose>> for PoseSequence {
    fn from(poses: Vec<Pose>) -> Self {
        Self(poses)
    }
}

impl std::iter::FromIterator<Pose> for PoseSequence {
    fn from_iter<I: IntoIterator<Item = Pose>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}


#[cfg(test)]
mod tests {
    use super::{fixtures, Keypoint, KeypointKind, Pose, PoseSequence, NUM_KEYPOINTS};
    use crate::error::Error;

    #[test]
    fn last_kind_fills_last_slot() {
        assert_eq!(KeypointKind::RightAnkle.idx().unwrap() + 1, NUM_KEYPOINTS);
        assert!(KeypointKind::from_idx(NUM_KEYPOINTS).is_err());
    }

    #[test]
    fn wrong_keypoint_count_is_malformed() {
        let keypoints = vec![Keypoint::new(KeypointKind::Nose, 1.0, 1.0, 1.0).unwrap(); 16];
        assert!(matches!(
            Pose::new(keypoints, 1.0),
            Err(Error::MalformedPose {
                expected: 17,
                got: 16
            })
        ));
    }

    #[test]
    fn keypoints_out_of_order_are_rejected() {
        let mut keypoints = fixtures::standing().keypoints().to_vec();
        keypoints.swap(0, 1);
        assert!(matches!(
            Pose::new(keypoints, 1.0),
            Err(Error::MisplacedKeypoint { index: 0, .. })
        ));
    }

    #[test]
    fn truncated_keeps_leading_frames() {
        let seq: PoseSequence = vec![
            fixtures::standing(),
            fixtures::horizontal(),
            fixtures::vertical(),
        ]
        .into();
        let seq = seq.truncated(2);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.poses()[1], fixtures::horizontal());
    }
}
