//! Train/test partitioning.

use crate::error::DatasetError;

/// A borrowed train/test partition of a series.
///
/// `train` is the prefix, `test` the suffix; together they cover the full
/// series with no overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split<'a> {
    train: &'a [f64],
    test: &'a [f64],
}

impl<'a> Split<'a> {
    /// Returns the training prefix.
    pub fn train(&self) -> &'a [f64] {
        self.train
    }

    /// Returns the held-out test suffix.
    pub fn test(&self) -> &'a [f64] {
        self.test
    }
}

/// Partitions `series` at index `floor(ratio * len)`.
///
/// Deterministic: no shuffling, the temporal order of the series is
/// preserved.
///
/// # Errors
///
/// Returns [`DatasetError::InvalidRatio`] if `ratio` is outside the open
/// interval (0, 1) or non-finite. Both endpoints are rejected.
pub fn split(series: &[f64], ratio: f64) -> Result<Split<'_>, DatasetError> {
    if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
        return Err(DatasetError::InvalidRatio { ratio });
    }

    let cut = (ratio * series.len() as f64).floor() as usize;
    let (train, test) = series.split_at(cut);
    Ok(Split { train, test })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1. prefix_suffix_partition
    #[test]
    fn prefix_suffix_partition() {
        let series: Vec<f64> = (1..=10).map(f64::from).collect();
        let s = split(&series, 0.8).unwrap();

        assert_eq!(s.train(), &series[..8]);
        assert_eq!(s.test(), &series[8..]);
        assert_eq!(s.train().len() + s.test().len(), series.len());
    }

    // 2. concatenation_recovers_series
    #[test]
    fn concatenation_recovers_series() {
        let series: Vec<f64> = (0..37).map(|i| i as f64 * 0.5).collect();
        for ratio in [0.1, 0.25, 0.5, 0.8, 0.9] {
            let s = split(&series, ratio).unwrap();
            let joined = [s.train(), s.test()].concat();
            assert_eq!(joined, series, "ratio = {ratio}");
        }
    }

    // 3. floor_partition_index
    #[test]
    fn floor_partition_index() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        // floor(0.5 * 5) = 2
        let s = split(&series, 0.5).unwrap();
        assert_eq!(s.train().len(), 2);
        assert_eq!(s.test().len(), 3);
    }

    // 4. endpoints_rejected
    #[test]
    fn endpoints_rejected() {
        let series = [1.0, 2.0, 3.0];
        for ratio in [0.0, 1.0] {
            let result = split(&series, ratio);
            assert!(
                matches!(result, Err(DatasetError::InvalidRatio { ratio: r }) if r == ratio),
                "ratio = {ratio} should be rejected"
            );
        }
    }

    // 5. out_of_range_rejected
    #[test]
    fn out_of_range_rejected() {
        let series = [1.0, 2.0, 3.0];
        for ratio in [-0.5, 1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(split(&series, ratio), Err(DatasetError::InvalidRatio { .. })),
                "ratio = {ratio} should be rejected"
            );
        }
    }

    // 6. empty_series
    #[test]
    fn empty_series() {
        let s = split(&[], 0.8).unwrap();
        assert!(s.train().is_empty());
        assert!(s.test().is_empty());
    }

    // 7. canonical_800_200
    #[test]
    fn canonical_800_200() {
        let series = vec![0.0; 1000];
        let s = split(&series, 0.8).unwrap();
        assert_eq!(s.train().len(), 800);
        assert_eq!(s.test().len(), 200);
    }
}
