//! Benchmark configuration: what to fit, how many times, and under which
//! runner policies.

use std::path::{Path, PathBuf};
use std::time::Duration;

use metron_model::ModelSpec;
use metron_score::Metric;
use metron_synth::GeneratorConfig;

use crate::error::BenchError;

/// One benchmark configuration: a model shape plus trial parameters.
///
/// Each trial draws a fresh process with coefficients from
/// `N(0, coeff_scale)` and innovation noise `N(0, noise)`, so the
/// configuration describes a population of processes rather than one
/// fixed coefficient vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialConfig {
    spec: ModelSpec,
    trials: usize,
    series_len: usize,
    coeff_scale: f64,
    noise: f64,
}

impl TrialConfig {
    /// Creates a configuration with the default draw parameters:
    /// `coeff_scale = 0.15`, `noise = 0.05`.
    pub fn new(spec: ModelSpec, trials: usize, series_len: usize) -> Self {
        Self {
            spec,
            trials,
            series_len,
            coeff_scale: 0.15,
            noise: 0.05,
        }
    }

    /// Sets the standard deviation of the coefficient draws.
    pub fn with_coeff_scale(mut self, coeff_scale: f64) -> Self {
        self.coeff_scale = coeff_scale;
        self
    }

    /// Sets the standard deviation of the innovation noise.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    // --- Accessors ---

    /// The model shape fitted in every trial.
    pub fn spec(&self) -> ModelSpec {
        self.spec
    }

    /// Number of trials to run.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Length of each generated series.
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    /// Standard deviation of the coefficient draws.
    pub fn coeff_scale(&self) -> f64 {
        self.coeff_scale
    }

    /// Standard deviation of the innovation noise.
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Validates the parameters the runner itself consumes.
    ///
    /// Draw scale, noise, and series length are checked downstream by the
    /// generator, which owns those rules.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidConfig`] when `trials` is zero.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig {
                reason: format!("{} has zero trials", self.spec),
            });
        }
        Ok(())
    }
}

/// Runner-wide options shared by every configuration in a run.
#[derive(Clone, Debug)]
pub struct BenchOptions {
    split_ratio: f64,
    metric: Metric,
    timeout: Option<Duration>,
    seed: Option<u64>,
    generator: GeneratorConfig,
    stage_dir: Option<PathBuf>,
}

impl BenchOptions {
    /// Creates options with defaults: `split_ratio = 0.8`,
    /// `metric = Metric::Mse`, no timeout, OS-entropy seeding, default
    /// generator settings, no staging.
    pub fn new() -> Self {
        Self {
            split_ratio: 0.8,
            metric: Metric::Mse,
            timeout: None,
            seed: None,
            generator: GeneratorConfig::new(),
            stage_dir: None,
        }
    }

    /// Sets the train fraction of each generated series.
    pub fn with_split_ratio(mut self, split_ratio: f64) -> Self {
        self.split_ratio = split_ratio;
        self
    }

    /// Sets the accuracy metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets a per-trial budget; trials whose fit+predict time exceeds it
    /// are skipped.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fixes the master seed, making the whole run reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the signal-generator configuration.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Routes every generated series through the on-disk store under this
    /// directory before splitting.
    pub fn with_stage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stage_dir = Some(dir.into());
        self
    }

    // --- Accessors ---

    /// Train fraction of each generated series.
    pub fn split_ratio(&self) -> f64 {
        self.split_ratio
    }

    /// Accuracy metric applied to each forecast.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Per-trial time budget, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Master seed, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Signal-generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Staging directory, if staging is enabled.
    pub fn stage_dir(&self) -> Option<&Path> {
        self.stage_dir.as_deref()
    }
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self::new()
    }
}
