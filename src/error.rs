use crate::pose::KeypointKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot compare empty pose sequences")]
    EmptyInput,

    #[error("keypoint {0:?} is at the origin and has no direction")]
    DegenerateKeypoint(KeypointKind),

    #[error("expected {expected} keypoints per pose, got {got}")]
    MalformedPose { expected: usize, got: usize },

    #[error("keypoint slot {index} holds {got:?}, expected {expected:?}")]
    MisplacedKeypoint {
        index: usize,
        expected: KeypointKind,
        got: KeypointKind,
    },

    #[error("failed to construct NotNan from f64: {1}")]
    ConstructNotNan(#[source] ordered_float::FloatIsNan, f64),

    #[error("keypoint coordinate is not finite: {0}")]
    NonFiniteCoordinate(f64),

    #[error("failed to convert usize value to keypoint kind: {0}")]
    ConvertUSizeToKeypointKind(usize),

    #[error("failed to convert keypoint variant to usize: {0:?}")]
    KeypointVariantToUSize(KeypointKind),

    #[error("failed to convert value to f64")]
    ConvertToF64,

    #[error("expected {expected} weights, got {got}")]
    WeightCount { expected: usize, got: usize },

    #[error("failed to parse weight: {1:?}")]
    ParseWeight(#[source] std::num::ParseFloatError, String),

    #[error("weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("weight sum must be positive and finite, got {0}")]
    InvalidWeightSum(f64),

    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    #[error("failed to parse percentage: {1:?}")]
    ParsePercentage(#[source] std::num::ParseFloatError, String),

    #[error("percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(f64),

    #[error("unsupported encoding version {got}, expected {expected}")]
    UnsupportedVersion { expected: u32, got: u32 },

    #[error("unknown sequence format: {0:?}")]
    UnknownFormat(String),

    #[error("failed to decode json")]
    DecodeJson(#[source] serde_json::Error),

    #[error("failed to encode json")]
    EncodeJson(#[source] serde_json::Error),

    #[error("failed to read file: {1:?}")]
    ReadFile(#[source] std::io::Error, std::path::PathBuf),

    #[error("failed to write file: {1:?}")]
    WriteFile(#[source] std::io::Error, std::path::PathBuf),
}
