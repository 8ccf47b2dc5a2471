//! The fit/predict capability boundary.

use crate::error::ModelError;
use crate::spec::ModelSpec;

/// An estimation engine: fits a [`ModelSpec`] to training data.
///
/// This trait is the only boundary between the benchmark harness and an
/// estimation library; anything satisfying it can be benchmarked. The
/// harness times the `fit` call together with the subsequent
/// [`FittedModel::predict`] call and nothing else.
pub trait FitEngine {
    /// A short stable name for reports ("css", "mean", ...).
    fn name(&self) -> &'static str;

    /// Fits `spec` to the training window.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::EmptyTrain`] | `train` is empty |
    /// | [`ModelError::NonFiniteTrain`] | any element is NaN or infinite |
    /// | [`ModelError::InvalidOrder`] | order empty or `train.len() < max(p, q, 1) + 1` |
    /// | [`ModelError::DidNotConverge`] | estimation cannot produce coefficients |
    fn fit(&self, train: &[f64], spec: ModelSpec) -> Result<Box<dyn FittedModel>, ModelError>;
}

/// A fitted model, ready to forecast the steps after its training window.
pub trait FittedModel {
    /// Returns the spec this model was fitted for.
    fn spec(&self) -> ModelSpec;

    /// Forecasts exactly `horizon` values, one-step-ahead chained: each
    /// prediction feeds back as a lagged value for the next step, and the
    /// held-out ground truth is never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidHorizon`] if `horizon == 0`.
    fn predict(&self, horizon: usize) -> Result<Vec<f64>, ModelError>;
}
