use crate::error::ScoreError;

/// Accuracy metric applied to a forecast against held-out truth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Mean squared error.
    #[default]
    Mse,
    /// Root mean squared error, in the units of the series itself.
    Rmse,
}

impl Metric {
    /// Returns the lowercase metric name used in reports and config files.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Mse => "mse",
            Metric::Rmse => "rmse",
        }
    }

    /// Scores `forecast` against `truth` with this metric.
    ///
    /// # Errors
    ///
    /// - [`ScoreError::LengthMismatch`] when the windows differ in length.
    /// - [`ScoreError::EmptyInput`] when both windows are empty.
    pub fn score(&self, forecast: &[f64], truth: &[f64]) -> Result<f64, ScoreError> {
        match self {
            Metric::Mse => mse(forecast, truth),
            Metric::Rmse => rmse(forecast, truth),
        }
    }
}

/// Mean squared error between `forecast` and `truth`.
///
/// # Errors
///
/// - [`ScoreError::LengthMismatch`] when the windows differ in length.
/// - [`ScoreError::EmptyInput`] when both windows are empty.
pub fn mse(forecast: &[f64], truth: &[f64]) -> Result<f64, ScoreError> {
    if forecast.len() != truth.len() {
        return Err(ScoreError::LengthMismatch {
            forecast: forecast.len(),
            truth: truth.len(),
        });
    }
    if forecast.is_empty() {
        return Err(ScoreError::EmptyInput);
    }

    let sum: f64 = forecast
        .iter()
        .zip(truth.iter())
        .map(|(f, t)| (f - t) * (f - t))
        .sum();
    Ok(sum / forecast.len() as f64)
}

/// Root mean squared error between `forecast` and `truth`.
///
/// # Errors
///
/// Same conditions as [`mse`].
pub fn rmse(forecast: &[f64], truth: &[f64]) -> Result<f64, ScoreError> {
    mse(forecast, truth).map(f64::sqrt)
}
