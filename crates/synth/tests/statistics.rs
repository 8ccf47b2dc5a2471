//! Statistical integration tests for metron-synth.
//!
//! Generated series are checked against the theoretical moments of their
//! generating process using long samples and generous tolerances.

use metron_synth::{GeneratorConfig, ProcessSpec, Warmup, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn variance(xs: &[f64], m: f64) -> f64 {
    xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64
}

fn acf1(xs: &[f64]) -> f64 {
    let m = mean(xs);
    let var = variance(xs, m);
    let cov: f64 = xs
        .iter()
        .skip(1)
        .zip(xs.iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / xs.len() as f64;
    cov / var
}

#[test]
fn ar1_matches_theoretical_moments() {
    let phi = 0.7;
    let spec = ProcessSpec::Ar {
        coeffs: vec![phi],
        noise: 1.0,
    };
    let config = GeneratorConfig::new().with_warmup(Warmup::Zeros);
    let mut rng = StdRng::seed_from_u64(42);

    let series = generate(&spec, 10_000, &config, &mut rng).unwrap();
    // Skip the warm-up transient before measuring.
    let body = &series[100..];

    let m = mean(body);
    let var = variance(body, m);
    let theoretical_var = 1.0 / (1.0 - phi * phi);

    assert!(m.abs() < 0.2, "mean = {m}, expected ~0");
    assert!(
        (var - theoretical_var).abs() < 0.5,
        "var = {var}, expected ~{theoretical_var}"
    );
    let rho = acf1(body);
    assert!((rho - phi).abs() < 0.1, "acf1 = {rho}, expected ~{phi}");
}

#[test]
fn ar1_baseline_shifts_mean() {
    // Stationary mean of an AR(1) with additive baseline b is b / (1 - phi).
    let spec = ProcessSpec::Ar {
        coeffs: vec![0.5],
        noise: 1.0,
    };
    let config = GeneratorConfig::new()
        .with_baseline(7.0)
        .with_warmup(Warmup::Zeros);
    let mut rng = StdRng::seed_from_u64(123);

    let series = generate(&spec, 10_000, &config, &mut rng).unwrap();
    let m = mean(&series[100..]);

    assert!((m - 14.0).abs() < 1.0, "mean = {m}, expected ~14");
}

#[test]
fn ma2_matches_theoretical_moments() {
    // A standalone MA series carries a fresh noise term per step, so
    // var = sigma^2 (1 + theta1^2 + theta2^2) and the lag-1 autocovariance
    // comes only from the shared lagged innovation: theta1 * theta2 * sigma^2.
    let (t1, t2) = (0.6, 0.4);
    let spec = ProcessSpec::Ma {
        coeffs: vec![t1, t2],
        noise: 1.0,
    };
    let mut rng = StdRng::seed_from_u64(7);

    let series = generate(&spec, 20_000, &GeneratorConfig::new(), &mut rng).unwrap();
    let body = &series[2..];

    let m = mean(body);
    let var = variance(body, m);
    let theoretical_var = 1.0 + t1 * t1 + t2 * t2;
    let theoretical_acf1 = (t1 * t2) / theoretical_var;

    assert!(m.abs() < 0.1, "mean = {m}, expected ~0");
    assert!(
        (var - theoretical_var).abs() < 0.3,
        "var = {var}, expected ~{theoretical_var}"
    );
    let rho = acf1(body);
    assert!(
        (rho - theoretical_acf1).abs() < 0.1,
        "acf1 = {rho}, expected ~{theoretical_acf1}"
    );
}

#[test]
fn arma_extra_noise_raises_variance() {
    let spec = ProcessSpec::Arma {
        ar: vec![0.5],
        ma: vec![0.6],
        noise: 1.0,
    };
    let base = GeneratorConfig::new().with_warmup(Warmup::Zeros);

    let mut rng1 = StdRng::seed_from_u64(11);
    let without = generate(&spec, 10_000, &base, &mut rng1).unwrap();

    let mut rng2 = StdRng::seed_from_u64(11);
    let with = generate(&spec, 10_000, &base.with_ma_noise_in_arma(true), &mut rng2).unwrap();

    let var_without = variance(&without[100..], mean(&without[100..]));
    let var_with = variance(&with[100..], mean(&with[100..]));

    // The extra per-step noise contributes an additional sigma^2 of variance.
    assert!(
        var_with > var_without + 0.5,
        "var_with = {var_with}, var_without = {var_without}"
    );
}

#[test]
fn drawn_spec_pipeline_deterministic() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(2024);
        let spec = ProcessSpec::draw_arma(5, 5, 0.01, 1.0, &mut rng).unwrap();
        generate(&spec, 1000, &GeneratorConfig::new().with_warmup(Warmup::Zeros), &mut rng).unwrap()
    };
    assert_eq!(run(), run());
}
