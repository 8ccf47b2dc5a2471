//! Sequential benchmark loop: draw a process, generate a series, split,
//! fit, forecast, score.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use metron_dataset::{read_series, split, write_series};
use metron_model::{FitEngine, ModelError, ModelFamily, ModelSpec};
use metron_synth::{ProcessSpec, generate};

use crate::config::{BenchOptions, TrialConfig};
use crate::error::BenchError;

/// One successful trial measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialRecord {
    spec: ModelSpec,
    elapsed: Duration,
    error: f64,
}

impl TrialRecord {
    /// The model shape that was fitted.
    pub fn spec(&self) -> ModelSpec {
        self.spec
    }

    /// Wall-clock time of fit plus predict.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Error metric value of the forecast.
    pub fn error(&self) -> f64 {
        self.error
    }
}

/// Per-configuration aggregates over its successful trials.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigSummary {
    spec: ModelSpec,
    n_trials: usize,
    n_skipped: usize,
    mean_elapsed: Option<Duration>,
    mean_error: Option<f64>,
}

impl ConfigSummary {
    pub(crate) fn new(
        spec: ModelSpec,
        n_trials: usize,
        n_skipped: usize,
        mean_elapsed: Option<Duration>,
        mean_error: Option<f64>,
    ) -> Self {
        Self {
            spec,
            n_trials,
            n_skipped,
            mean_elapsed,
            mean_error,
        }
    }

    /// The model shape this summary describes.
    pub fn spec(&self) -> ModelSpec {
        self.spec
    }

    /// Number of successful trials.
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Number of trials skipped for non-convergence or timeout.
    pub fn n_skipped(&self) -> usize {
        self.n_skipped
    }

    /// Mean fit+predict time, `None` when no trial succeeded.
    pub fn mean_elapsed(&self) -> Option<Duration> {
        self.mean_elapsed
    }

    /// Mean error metric value, `None` when no trial succeeded.
    pub fn mean_error(&self) -> Option<f64> {
        self.mean_error
    }
}

/// Runs every configuration against `engine` and returns one summary per
/// configuration, in input order.
///
/// All configurations are validated before the first trial runs. Trials
/// execute sequentially; each draws its own seed from the master RNG, so a
/// fixed [`BenchOptions::with_seed`] reproduces the whole run.
///
/// A trial that fails with [`ModelError::DidNotConverge`], or whose
/// fit+predict time exceeds the configured timeout, is skipped and counted
/// in `n_skipped`; any other error aborts the run.
///
/// # Errors
///
/// - [`BenchError::InvalidConfig`] when a configuration fails validation.
/// - [`BenchError::Synth`], [`BenchError::Dataset`], [`BenchError::Model`],
///   [`BenchError::Score`] when a pipeline stage fails fast.
pub fn run(
    engine: &dyn FitEngine,
    configs: &[TrialConfig],
    options: &BenchOptions,
) -> Result<Vec<ConfigSummary>, BenchError> {
    for config in configs {
        config.validate()?;
    }

    let mut master = match options.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut summaries = Vec::with_capacity(configs.len());
    for config in configs {
        info!(
            model = %config.spec(),
            trials = config.trials(),
            series_len = config.series_len(),
            engine = engine.name(),
            "benchmarking configuration"
        );
        summaries.push(run_config(engine, config, options, &mut master)?);
    }
    Ok(summaries)
}

fn run_config(
    engine: &dyn FitEngine,
    config: &TrialConfig,
    options: &BenchOptions,
    master: &mut StdRng,
) -> Result<ConfigSummary, BenchError> {
    let mut records = Vec::with_capacity(config.trials());
    let mut n_skipped = 0;

    for trial in 0..config.trials() {
        let trial_seed = master.random::<u64>();
        debug!(model = %config.spec(), trial, trial_seed, "starting trial");
        let mut rng = StdRng::seed_from_u64(trial_seed);

        match run_trial(engine, config, options, trial, &mut rng)? {
            Some(record) => records.push(record),
            None => n_skipped += 1,
        }
    }

    Ok(summarise(config.spec(), &records, n_skipped))
}

/// Runs one trial. `Ok(None)` means the trial was skipped.
fn run_trial(
    engine: &dyn FitEngine,
    config: &TrialConfig,
    options: &BenchOptions,
    trial: usize,
    rng: &mut StdRng,
) -> Result<Option<TrialRecord>, BenchError> {
    let spec = config.spec();
    let process = draw_process(spec, config.coeff_scale(), config.noise(), rng)?;
    let mut series = generate(&process, config.series_len(), options.generator(), rng)?;

    // Staging exercises the same write/read path as file-backed workloads;
    // the formatting is lossless, so scores are unchanged.
    if let Some(dir) = options.stage_dir() {
        let path = dir.join(format!("{}_{trial}.txt", file_stem(spec)));
        write_series(&path, &series)?;
        series = read_series(&path)?;
    }

    let parts = split(&series, options.split_ratio())?;
    let (train, test) = (parts.train(), parts.test());

    let started = Instant::now();
    let outcome = engine
        .fit(train, spec)
        .and_then(|model| model.predict(test.len()));
    let elapsed = started.elapsed();

    let forecast = match outcome {
        Ok(forecast) => forecast,
        Err(ModelError::DidNotConverge) => {
            warn!(model = %spec, trial, "estimation did not converge, skipping trial");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(timeout) = options.timeout()
        && elapsed > timeout
    {
        warn!(
            model = %spec,
            trial,
            elapsed_us = elapsed.as_micros() as u64,
            "trial exceeded timeout, skipping"
        );
        return Ok(None);
    }

    let error = options.metric().score(&forecast, test)?;
    Ok(Some(TrialRecord {
        spec,
        elapsed,
        error,
    }))
}

fn draw_process<R: Rng>(
    spec: ModelSpec,
    coeff_scale: f64,
    noise: f64,
    rng: &mut R,
) -> Result<ProcessSpec, BenchError> {
    let process = match spec.family() {
        ModelFamily::Ar => ProcessSpec::draw_ar(spec.p(), coeff_scale, noise, rng)?,
        ModelFamily::Ma => ProcessSpec::draw_ma(spec.q(), coeff_scale, noise, rng)?,
        ModelFamily::Arma => {
            ProcessSpec::draw_arma(spec.p(), spec.q(), coeff_scale, noise, rng)?
        }
    };
    Ok(process)
}

/// Lowercase dataset-file stem for a model, e.g. `arma(5,5)`.
fn file_stem(spec: ModelSpec) -> String {
    spec.to_string().to_lowercase()
}

fn summarise(spec: ModelSpec, records: &[TrialRecord], n_skipped: usize) -> ConfigSummary {
    if records.is_empty() {
        return ConfigSummary::new(spec, 0, n_skipped, None, None);
    }

    let total_elapsed: Duration = records.iter().map(|r| r.elapsed()).sum();
    let total_error: f64 = records.iter().map(|r| r.error()).sum();
    ConfigSummary::new(
        spec,
        records.len(),
        n_skipped,
        Some(total_elapsed / records.len() as u32),
        Some(total_error / records.len() as f64),
    )
}
