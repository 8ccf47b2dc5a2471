//! Translates deserialized TOML rows into the typed configs the library
//! crates accept, validating names and required fields along the way.

use std::time::Duration;

use anyhow::{Result, bail};

use crate::config::*;

// Import crate types
use metron_bench::{BenchOptions, TrialConfig};
use metron_model::{CssEngine, FitEngine, MeanEngine, ModelSpec};
use metron_score::Metric;
use metron_synth::{GeneratorConfig, Warmup};

/// Parses a metric name string into the corresponding enum variant.
pub fn parse_metric(s: &str) -> Result<Metric> {
    match s.to_lowercase().as_str() {
        "mse" => Ok(Metric::Mse),
        "rmse" => Ok(Metric::Rmse),
        other => bail!("unknown metric: {other:?}"),
    }
}

/// Parses a warmup strategy name string into the corresponding enum variant.
pub fn parse_warmup(s: &str) -> Result<Warmup> {
    match s.to_lowercase().as_str() {
        "uniform" => Ok(Warmup::Uniform),
        "gaussian" => Ok(Warmup::Gaussian),
        "zeros" => Ok(Warmup::Zeros),
        other => bail!("unknown warmup strategy: {other:?}"),
    }
}

/// Builds a fitting engine from its config name.
pub fn build_engine(name: &str) -> Result<Box<dyn FitEngine>> {
    match name.to_lowercase().as_str() {
        "css" => Ok(Box::new(CssEngine::new())),
        "mean" => Ok(Box::new(MeanEngine)),
        other => bail!("unknown engine: {other:?}"),
    }
}

/// Builds a [`ModelSpec`] from one suite row.
pub fn build_model_spec(row: &ConfigToml) -> Result<ModelSpec> {
    match row.family.to_lowercase().as_str() {
        "ar" => match row.p {
            Some(p) => Ok(ModelSpec::ar(p)),
            None => bail!("ar config needs p"),
        },
        "ma" => match row.q {
            Some(q) => Ok(ModelSpec::ma(q)),
            None => bail!("ma config needs q"),
        },
        "arma" => match (row.p, row.q) {
            (Some(p), Some(q)) => Ok(ModelSpec::arma(p, q)),
            _ => bail!("arma config needs both p and q"),
        },
        other => bail!("unknown model family: {other:?}"),
    }
}

/// Builds a [`GeneratorConfig`] from the TOML generator configuration.
pub fn build_generator_config(generator: &GeneratorToml) -> Result<GeneratorConfig> {
    let warmup = parse_warmup(&generator.warmup)?;
    Ok(GeneratorConfig::new()
        .with_baseline(generator.baseline)
        .with_warmup(warmup)
        .with_ma_noise_in_arma(generator.ma_noise_in_arma))
}

/// Builds the trial configuration list, applying `[bench]` defaults to
/// each suite row that does not override them.
pub fn build_trial_configs(config: &MetronConfig) -> Result<Vec<TrialConfig>> {
    let bench = &config.bench;
    config
        .configs
        .iter()
        .map(|row| {
            let spec = build_model_spec(row)?;
            Ok(TrialConfig::new(
                spec,
                row.trials.unwrap_or(bench.trials),
                row.series_len.unwrap_or(bench.series_len),
            )
            .with_coeff_scale(row.coeff_scale.unwrap_or(bench.coeff_scale))
            .with_noise(row.noise.unwrap_or(bench.noise)))
        })
        .collect()
}

/// Builds [`BenchOptions`] from the TOML configuration.
///
/// A CLI seed override takes precedence over the config file seed.
pub fn build_bench_options(config: &MetronConfig, seed: Option<u64>) -> Result<BenchOptions> {
    let metric = parse_metric(&config.bench.metric)?;
    let generator = build_generator_config(&config.generator)?;

    let mut options = BenchOptions::new()
        .with_split_ratio(config.bench.split_ratio)
        .with_metric(metric)
        .with_generator(generator);
    if let Some(ms) = config.bench.timeout_ms {
        options = options.with_timeout(Duration::from_millis(ms));
    }
    if let Some(s) = seed.or(config.seed) {
        options = options.with_seed(s);
    }
    if config.bench.stage {
        options = options.with_stage_dir(&config.output.dir);
    }
    Ok(options)
}
