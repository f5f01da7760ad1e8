use crate::{
    codec::{raw, SequenceFormat},
    error::Error,
    pose::PoseSequence,
    result::ComparisonResult,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    payload: T,
}

/// Only the version is read first so a newer payload shape is reported as a
/// version mismatch instead of a field error.
#[derive(Deserialize)]
struct VersionOnly {
    version: u32,
}

fn decode<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let VersionOnly { version } = serde_json::from_slice(bytes).map_err(Error::DecodeJson)?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion {
            expected: VERSION,
            got: version,
        });
    }
    let envelope: Envelope<T> = serde_json::from_slice(bytes).map_err(Error::DecodeJson)?;
    Ok(envelope.payload)
}

fn encode<T>(payload: T) -> Result<Vec<u8>, Error>
where
    T: Serialize,
{
    serde_json::to_vec_pretty(&Envelope {
        version: VERSION,
        payload,
    })
    .map_err(Error::EncodeJson)
}

/// `{"version": 1, "payload": [pose, ...]}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Versioned;

impl SequenceFormat for Versioned {
    fn name(&self) -> &'static str {
        "versioned"
    }

    fn decode(&self, bytes: &[u8]) -> Result<PoseSequence, Error> {
        raw::into_sequence(decode(bytes)?)
    }

    fn encode(&self, sequence: &PoseSequence) -> Result<Vec<u8>, Error> {
        encode(raw::from_sequence(sequence))
    }
}

pub fn encode_result(result: &ComparisonResult) -> Result<Vec<u8>, Error> {
    encode(result)
}

pub fn decode_result(bytes: &[u8]) -> Result<ComparisonResult, Error> {
    decode(bytes)
}
