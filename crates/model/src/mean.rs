//! Baseline engine that forecasts the training mean.

use crate::engine::{FitEngine, FittedModel};
use crate::error::ModelError;
use crate::spec::ModelSpec;

/// Baseline engine: every forecast step is the training-window mean.
///
/// Useful as a floor when comparing real engines; any engine that cannot
/// beat this one is not extracting structure from the series. The model
/// orders in `spec` are recorded but otherwise unused.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanEngine;

impl MeanEngine {
    /// Creates the baseline engine; it carries no tunable state.
    pub fn new() -> Self {
        Self
    }
}

impl FitEngine for MeanEngine {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn fit(&self, train: &[f64], spec: ModelSpec) -> Result<Box<dyn FittedModel>, ModelError> {
        if train.is_empty() {
            return Err(ModelError::EmptyTrain);
        }
        if train.iter().any(|x| !x.is_finite()) {
            return Err(ModelError::NonFiniteTrain);
        }
        let mean = train.iter().sum::<f64>() / train.len() as f64;
        Ok(Box::new(MeanFit { spec, mean }))
    }
}

/// A model fitted by [`MeanEngine`].
#[derive(Clone, Copy, Debug)]
pub struct MeanFit {
    spec: ModelSpec,
    mean: f64,
}

impl MeanFit {
    /// Returns the training-window mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl FittedModel for MeanFit {
    fn spec(&self) -> ModelSpec {
        self.spec
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>, ModelError> {
        if horizon == 0 {
            return Err(ModelError::InvalidHorizon);
        }
        Ok(vec![self.mean; horizon])
    }
}
