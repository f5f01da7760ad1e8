use crate::{error::Error, pose::PoseSequence, result::ComparisonResult};
use std::{fmt, fs, path::Path, str::FromStr};

pub trait SequenceFormat {
    /// The name used to select this format on the command line.
    fn name(&self) -> &'static str;

    /// Decode a captured pose sequence.
    fn decode(&self, bytes: &[u8]) -> Result<PoseSequence, Error>;

    /// Encode a pose sequence so that [`SequenceFormat::decode`] reads it back.
    fn encode(&self, sequence: &PoseSequence) -> Result<Vec<u8>, Error>;

    /// Read and decode a sequence file.
    fn read<P>(&self, path: P) -> Result<PoseSequence, Error>
    where
        P: AsRef<Path>,
        Self: Sized,
    {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::ReadFile(e, path.to_path_buf()))?;
        self.decode(&bytes)
    }
}

mod posenet;
mod raw;
mod versioned;

pub use posenet::Posenet;
pub use versioned::{decode_result, encode_result, Versioned, VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Versioned JSON envelope.
    Versioned(Versioned),
    /// Bare PoseNet pose array.
    Posenet(Posenet),
}

impl Default for Format {
    fn default() -> Self {
        Self::Versioned(Versioned)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "versioned" => Ok(Self::Versioned(Versioned)),
            "posenet" => Ok(Self::Posenet(Posenet)),
            other => Err(Error::UnknownFormat(other.to_owned())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SequenceFormat for Format {
    fn name(&self) -> &'static str {
        match self {
            Self::Versioned(f) => f.name(),
            Self::Posenet(f) => f.name(),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<PoseSequence, Error> {
        match self {
            Self::Versioned(f) => f.decode(bytes),
            Self::Posenet(f) => f.decode(bytes),
        }
    }

    fn encode(&self, sequence: &PoseSequence) -> Result<Vec<u8>, Error> {
        match self {
            Self::Versioned(f) => f.encode(sequence),
            Self::Posenet(f) => f.encode(sequence),
        }
    }
}

pub fn read_result<P>(path: P) -> Result<ComparisonResult, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::ReadFile(e, path.to_path_buf()))?;
    decode_result(&bytes)
}

pub fn write_result<P>(path: P, result: &ComparisonResult) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::write(path, encode_result(result)?).map_err(|e| Error::WriteFile(e, path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::{read_result, write_result, Format, SequenceFormat};
    use crate::{error::Error, pose::fixtures, pose::PoseSequence, score::Scorer};

    #[test]
    fn format_names_round_trip() {
        for name in ["versioned", "posenet"].iter() {
            let format: Format = name.parse().unwrap();
            assert_eq!(format.to_string(), *name);
        }
        assert!(matches!(
            "yaml".parse::<Format>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn formats_are_not_interchangeable() {
        let sequence: PoseSequence = vec![fixtures::standing()].into();
        let bytes = Format::default().encode(&sequence).unwrap();
        let posenet: Format = "posenet".parse().unwrap();
        assert!(posenet.decode(&bytes).is_err());
    }

    #[test]
    fn files_round_trip() {
        let dir = std::env::temp_dir().join(format!("pose-compare-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let sequence: PoseSequence = (0..6)
            .map(|i| if i == 2 { fixtures::vertical() } else { fixtures::horizontal() })
            .collect();
        let sequence_path = dir.join("reference.json");
        std::fs::write(&sequence_path, Format::default().encode(&sequence).unwrap()).unwrap();
        let read_back = Format::default().read(&sequence_path).unwrap();
        assert_eq!(read_back, sequence);

        let result = Scorer::default()
            .compare(&read_back, &std::iter::repeat(fixtures::horizontal()).take(6).collect())
            .unwrap();
        let result_path = dir.join("result.json");
        write_result(&result_path, &result).unwrap();
        assert_eq!(read_result(&result_path).unwrap().score, result.score);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Format::default().read("/definitely/not/here.json"),
            Err(Error::ReadFile(..))
        ));
    }
}
