use crate::{
    error::Error,
    result::{Highlight, Highlights, Percentage},
    score::extremes::{Extremes, Rank, ScoredFrame},
};
use num_traits::ToPrimitive;
use ordered_float::NotNan;

/// Sequences longer than this report the top three moments instead of one.
pub(crate) const SINGLE_HIGHLIGHT_MAX_FRAMES: usize = 5;
pub(crate) const MULTI_HIGHLIGHT_COUNT: usize = 3;

/// How many best and worst moments to report for a sequence of `len` frames.
pub(crate) fn highlight_count(len: usize) -> usize {
    if len > SINGLE_HIGHLIGHT_MAX_FRAMES {
        MULTI_HIGHLIGHT_COUNT
    } else {
        1
    }
}

/// Select the best and worst frames from per-frame scores in `[0, 1]`.
pub(crate) fn extract_highlights(scores: &[f64], sample_rate: f64) -> Result<Highlights, Error> {
    if scores.is_empty() {
        return Err(Error::EmptyInput);
    }

    let k = highlight_count(scores.len());
    let mut maxes = Extremes::new(Rank::Highest, k);
    let mut mins = Extremes::new(Rank::Lowest, k);

    for (index, &score) in scores.iter().enumerate() {
        let frame = ScoredFrame {
            index,
            score: NotNan::new(score).map_err(|e| Error::ConstructNotNan(e, score))?,
        };
        maxes.push(frame);
        mins.push(frame);
    }

    let to_highlight = |frame: ScoredFrame| -> Result<Highlight, Error> {
        Ok(Highlight {
            score: Percentage::from_fraction(frame.score.into_inner()),
            index: frame.index,
            seconds: frame.index.to_f64().ok_or(Error::ConvertToF64)? / sample_rate,
        })
    };

    Ok(Highlights {
        maxes: maxes
            .into_vec()
            .into_iter()
            .map(&to_highlight)
            .collect::<Result<_, _>>()?,
        mins: mins
            .into_vec()
            .into_iter()
            .map(&to_highlight)
            .collect::<Result<_, _>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 50.0;

    fn indices(highlights: &[Highlight]) -> Vec<usize> {
        highlights.iter().map(|h| h.index).collect()
    }

    mod highlight_count_tests {
        use super::*;

        #[test]
        fn tiers() {
            assert_eq!(highlight_count(1), 1);
            assert_eq!(highlight_count(2), 1);
            assert_eq!(highlight_count(5), 1);
            assert_eq!(highlight_count(6), 3);
            assert_eq!(highlight_count(500), 3);
        }
    }

    mod extract_highlights_tests {
        use super::*;
        use assert_approx_eq::assert_approx_eq;

        #[test]
        fn empty_fails_fast() {
            assert!(matches!(
                extract_highlights(&[], RATE),
                Err(Error::EmptyInput)
            ));
        }

        #[test]
        fn single_frame_is_best_and_worst() {
            let highlights = extract_highlights(&[0.42], RATE).unwrap();
            assert_eq!(highlights.maxes.len(), 1);
            assert_eq!(highlights.maxes, highlights.mins);
            assert_eq!(highlights.maxes[0].index, 0);
            assert_eq!(highlights.maxes[0].score.to_string(), "42.00");
        }

        #[test]
        fn short_sequence_reports_one_each() {
            let highlights = extract_highlights(&[0.3, 0.1, 0.8, 0.1, 0.8], RATE).unwrap();
            assert_eq!(indices(&highlights.maxes), vec![2]);
            assert_eq!(indices(&highlights.mins), vec![1]);
            assert_eq!(highlights.maxes[0].score.to_string(), "80.00");
            assert_eq!(highlights.mins[0].score.to_string(), "10.00");
        }

        #[test]
        fn long_sequence_reports_three_each() {
            let scores = [0.6, 0.897, 0.01, 0.345, 0.28473, 0.7, 0.5];
            let highlights = extract_highlights(&scores, RATE).unwrap();
            assert_eq!(indices(&highlights.maxes), vec![1, 5, 0]);
            assert_eq!(indices(&highlights.mins), vec![2, 4, 3]);
            let maxes: Vec<_> = highlights.maxes.iter().map(|h| h.score.to_string()).collect();
            assert_eq!(maxes, vec!["89.70", "70.00", "60.00"]);
            let mins: Vec<_> = highlights.mins.iter().map(|h| h.score.to_string()).collect();
            assert_eq!(mins, vec!["1.00", "28.47", "34.50"]);
        }

        #[test]
        fn indices_convert_to_seconds() {
            let mut scores = vec![0.5; 200];
            scores[100] = 0.9;
            scores[150] = 0.0;
            let highlights = extract_highlights(&scores, RATE).unwrap();
            assert_eq!(highlights.maxes[0].index, 100);
            assert_approx_eq!(highlights.maxes[0].seconds, 2.0);
            assert_eq!(highlights.mins[0].index, 150);
            assert_approx_eq!(highlights.mins[0].seconds, 3.0);
        }

        #[test]
        fn sample_rate_is_configurable() {
            let highlights = extract_highlights(&[0.1, 0.2, 0.3], 30.0).unwrap();
            assert_approx_eq!(highlights.maxes[0].seconds, 2.0 / 30.0);
        }

        #[test]
        fn perfect_frame_among_poor_ones() {
            let scores = [0.2, 0.3, 0.25, 1.0, 0.4, 0.35];
            let highlights = extract_highlights(&scores, RATE).unwrap();
            assert_eq!(highlights.maxes[0].index, 3);
            assert_eq!(highlights.maxes[0].score.to_string(), "100.00");
        }

        #[test]
        fn zero_frame_is_worst() {
            let scores = [0.2, 0.3, 0.25, 0.0, 0.4, 0.35];
            let highlights = extract_highlights(&scores, RATE).unwrap();
            assert_eq!(highlights.mins[0].index, 3);
            assert_eq!(highlights.mins[0].score.to_string(), "0.00");
            assert_eq!(indices(&highlights.mins), vec![3, 0, 2]);
        }

        #[test]
        fn ties_favor_earliest() {
            let highlights = extract_highlights(&[0.5; 8], RATE).unwrap();
            assert_eq!(indices(&highlights.maxes), vec![0, 1, 2]);
            assert_eq!(indices(&highlights.mins), vec![0, 1, 2]);
        }

        #[test]
        fn nan_is_rejected() {
            assert!(matches!(
                extract_highlights(&[0.1, f64::NAN], RATE),
                Err(Error::ConstructNotNan(..))
            ));
        }
    }
}
