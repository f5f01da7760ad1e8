use crate::error::Error;
use std::{convert::TryFrom, fmt};

/// A fraction in `[0, 1]` expressed as a percentage with two decimals.
///
/// Serialized as a string such as `"87.25"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Percentage(f64);

impl Percentage {
    pub fn from_fraction(fraction: f64) -> Self {
        let percent = fraction.max(0.0).min(1.0) * 100.0;
        Self((percent * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Percentage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent: f64 = s
            .parse()
            .map_err(|e| Error::ParsePercentage(e, s.to_owned()))?;
        if (0.0..=100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(Error::InvalidPercentage(percent))
        }
    }
}

impl TryFrom<String> for Percentage {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Percentage> for String {
    fn from(value: Percentage) -> Self {
        value.to_string()
    }
}

/// One extreme frame.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Highlight {
    pub score: Percentage,
    /// Frame index into the compared sequences.
    pub index: usize,
    /// Time offset of the frame at the configured sample rate.
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Highlights {
    /// Most similar frames, best first.
    pub maxes: Vec<Highlight>,
    /// Least similar frames, worst first.
    pub mins: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonResult {
    pub score: Percentage,
    pub highlights: Highlights,
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn moments(highlights: &[Highlight]) -> String {
            highlights
                .iter()
                .map(|h| format!("({}|{} sec)", h.score, h.seconds))
                .collect::<Vec<_>>()
                .join(", ")
        }

        writeln!(f, "Final score: {}", self.score)?;
        writeln!(f, "Best pose at {}", moments(&self.highlights.maxes))?;
        write!(f, "Worst pose at {}", moments(&self.highlights.mins))
    }
}
