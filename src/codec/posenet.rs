use crate::{
    codec::{raw, SequenceFormat},
    error::Error,
    pose::PoseSequence,
};

/// A bare JSON array of PoseNet poses, as stored by the capture front-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Posenet;

impl SequenceFormat for Posenet {
    fn name(&self) -> &'static str {
        "posenet"
    }

    fn decode(&self, bytes: &[u8]) -> Result<PoseSequence, Error> {
        raw::into_sequence(serde_json::from_slice(bytes).map_err(Error::DecodeJson)?)
    }

    fn encode(&self, sequence: &PoseSequence) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(&raw::from_sequence(sequence)).map_err(Error::EncodeJson)
    }
}
