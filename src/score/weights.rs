use crate::{error::Error, pose::NUM_KEYPOINTS};
use ndarray::{Array1, ArrayView1};
use std::{fmt, str::FromStr};

pub(crate) const DEFAULT_WEIGHTS: &str = "1,3,3,1,1,5,5,5,5,5,5,1,1,0,0,0,0";

/// Per-keypoint importance, indexed like [`crate::pose::KeypointKind`].
///
/// Ankles and knees carry zero weight in the default table.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights(Array1<f64>);

impl Weights {
    pub fn new(weights: [f64; NUM_KEYPOINTS]) -> Result<Self, Error> {
        if let Some(&bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::InvalidWeight(bad));
        }
        Ok(Self(Array1::from(weights.to_vec())))
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    /// The true sum of the table, which need not match the configured weight sum.
    pub fn total(&self) -> f64 {
        self.0.sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
            .parse()
            .expect("default weight table is well formed")
    }
}

impl FromStr for Weights {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(str::trim)
            .map(|w| w.parse().map_err(|e| Error::ParseWeight(e, w.to_owned())))
            .collect::<Result<Vec<f64>, _>>()?;
        let got = values.len();
        let mut table = [0.0; NUM_KEYPOINTS];
        if got != NUM_KEYPOINTS {
            return Err(Error::WeightCount {
                expected: NUM_KEYPOINTS,
                got,
            });
        }
        table.copy_from_slice(&values);
        Self::new(table)
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for w in self.0.iter() {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{}", w)?;
        }
        Ok(())
    }
}
