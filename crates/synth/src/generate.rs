//! Synthetic series generation.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::{GeneratorConfig, Warmup};
use crate::error::SynthError;
use crate::spec::ProcessSpec;

/// Generates a synthetic series of length `n` following `spec`.
///
/// AR(p): the first `p` samples come from the configured warm-up
/// distribution (without the baseline); every later sample is
/// `baseline + sum(coeff[j] * value[i-1-j]) + N(0, sigma)`.
///
/// MA(q): an innovation sequence of length `n` is drawn up front; samples
/// at indices below `q` are exactly zero, every later sample is
/// `sum(coeff[j] * eps[i-1-j]) + N(0, sigma)`.
///
/// ARMA(p,q): the sum of an AR(p) series and an MA(q) series, each driven
/// by its own innovations. The AR component is generated first. Whether the
/// MA component keeps its per-step noise term is controlled by
/// [`GeneratorConfig::ma_noise_in_arma`].
///
/// The result is a pure function of `spec`, `n`, `config`, and the RNG
/// state: a seeded RNG reproduces the series exactly.
///
/// # Arguments
///
/// * `spec` - The generating process.
/// * `n` - Number of samples to produce.
/// * `config` - Baseline, warm-up, and ARMA noise settings.
/// * `rng` - Random number generator.
///
/// # Errors
///
/// Returns [`SynthError::InvalidOrder`] or [`SynthError::InvalidNoise`] if
/// the spec fails validation, and [`SynthError::InvalidLength`] if
/// `n <= max(p, q)`.
pub fn generate<R: Rng>(
    spec: &ProcessSpec,
    n: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<f64>, SynthError> {
    spec.validate()?;

    let order = spec.order();
    if n <= order {
        return Err(SynthError::InvalidLength { n, min: order + 1 });
    }

    match spec {
        ProcessSpec::Ar { coeffs, noise } => generate_ar(coeffs, *noise, n, config, rng),
        ProcessSpec::Ma { coeffs, noise } => generate_ma(coeffs, *noise, n, true, rng),
        ProcessSpec::Arma { ar, ma, noise } => {
            let ar_part = generate_ar(ar, *noise, n, config, rng)?;
            let ma_part = generate_ma(ma, *noise, n, config.ma_noise_in_arma(), rng)?;
            Ok(ar_part
                .iter()
                .zip(ma_part.iter())
                .map(|(a, m)| a + m)
                .collect())
        }
    }
}

/// AR(p) recurrence over freshly drawn innovations.
fn generate_ar<R: Rng>(
    coeffs: &[f64],
    noise: f64,
    n: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<f64>, SynthError> {
    let normal = Normal::new(0.0, noise).map_err(|_| SynthError::InvalidNoise { sigma: noise })?;
    let p = coeffs.len();

    let mut values = Vec::with_capacity(n);
    for _ in 0..p {
        values.push(match config.warmup() {
            Warmup::Uniform => rng.random::<f64>(),
            Warmup::Gaussian => normal.sample(rng),
            Warmup::Zeros => 0.0,
        });
    }

    for i in p..n {
        let mut v = config.baseline();
        for (j, &c) in coeffs.iter().enumerate() {
            v += c * values[i - 1 - j];
        }
        v += normal.sample(rng);
        values.push(v);
    }

    Ok(values)
}

/// MA(q) recurrence over a freshly drawn innovation sequence.
///
/// The first `q` samples are exactly zero. `per_step_noise` controls the
/// extra noise term added to each sample past the warm-up region.
fn generate_ma<R: Rng>(
    coeffs: &[f64],
    noise: f64,
    n: usize,
    per_step_noise: bool,
    rng: &mut R,
) -> Result<Vec<f64>, SynthError> {
    let normal = Normal::new(0.0, noise).map_err(|_| SynthError::InvalidNoise { sigma: noise })?;
    let q = coeffs.len();

    let eps: Vec<f64> = (0..n).map(|_| normal.sample(rng)).collect();

    let mut values = vec![0.0; n];
    for i in q..n {
        let mut v = if per_step_noise {
            normal.sample(rng)
        } else {
            0.0
        };
        for (j, &c) in coeffs.iter().enumerate() {
            v += c * eps[i - 1 - j];
        }
        values[i] = v;
    }

    Ok(values)
}
