//! End-to-end runner scenarios: full generate/split/fit/score pipelines
//! against both engines, plus skip-policy and staging behaviour.

use std::time::Duration;

use metron_bench::{BenchError, BenchOptions, TrialConfig, run};
use metron_model::{CssEngine, FitEngine, FittedModel, MeanEngine, ModelError, ModelSpec};
use metron_score::Metric;
use metron_synth::SynthError;

/// Engine stub whose fits never converge.
struct FailingEngine;

impl FitEngine for FailingEngine {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn fit(&self, _train: &[f64], _spec: ModelSpec) -> Result<Box<dyn FittedModel>, ModelError> {
        Err(ModelError::DidNotConverge)
    }
}

#[test]
fn ar5_with_small_coefficients_scores_well() {
    // Small draws keep the process stable and the forecast error bounded.
    let configs = [TrialConfig::new(ModelSpec::ar(5), 3, 100)
        .with_coeff_scale(0.03)
        .with_noise(0.05)];
    let options = BenchOptions::new().with_seed(42).with_metric(Metric::Mse);

    let summaries = run(&CssEngine::new(), &configs, &options).unwrap();
    assert_eq!(summaries.len(), 1);

    let summary = &summaries[0];
    assert_eq!(summary.spec(), ModelSpec::ar(5));
    assert_eq!(summary.n_trials(), 3);
    assert_eq!(summary.n_skipped(), 0);
    let mse = summary.mean_error().unwrap();
    assert!(mse < 1.0, "mean MSE {mse} should be well under 1.0");
}

#[test]
fn ma25_long_horizon_is_bounded() {
    // A 25th-order MA fit either converges to a finite score over the
    // 200-step test window or is skipped; it never corrupts the summary.
    let configs = [TrialConfig::new(ModelSpec::ma(25), 1, 1000)];
    let options = BenchOptions::new().with_seed(7);

    let summaries = run(&CssEngine::new(), &configs, &options).unwrap();
    let summary = &summaries[0];
    assert_eq!(summary.n_trials() + summary.n_skipped(), 1);

    match summary.mean_error() {
        Some(error) => {
            assert!(error.is_finite() && error >= 0.0, "mean error = {error}");
            assert!(summary.mean_elapsed().is_some());
        }
        None => {
            assert_eq!(summary.n_skipped(), 1);
            assert_eq!(summary.mean_elapsed(), None);
        }
    }
}

#[test]
fn summaries_preserve_config_order() {
    let configs = [
        TrialConfig::new(ModelSpec::ar(2), 5, 200),
        TrialConfig::new(ModelSpec::ma(2), 5, 200),
    ];
    let options = BenchOptions::new().with_seed(11);

    let summaries = run(&MeanEngine, &configs, &options).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].spec(), ModelSpec::ar(2));
    assert_eq!(summaries[1].spec(), ModelSpec::ma(2));

    for summary in &summaries {
        assert_eq!(summary.n_trials(), 5);
        assert_eq!(summary.n_skipped(), 0);
        assert!(summary.mean_error().unwrap() >= 0.0);
        assert!(summary.mean_elapsed().is_some());
    }
}

#[test]
fn always_failing_engine_yields_sentinel_summary() {
    let configs = [TrialConfig::new(ModelSpec::ar(3), 4, 100)];
    let options = BenchOptions::new().with_seed(3);

    let summaries = run(&FailingEngine, &configs, &options).unwrap();
    let summary = &summaries[0];
    assert_eq!(summary.n_trials(), 0);
    assert_eq!(summary.n_skipped(), 4);
    assert_eq!(summary.mean_elapsed(), None);
    assert_eq!(summary.mean_error(), None);
}

#[test]
fn fixed_seed_reproduces_scores() {
    let configs = [TrialConfig::new(ModelSpec::ar(2), 3, 150)];
    let options = BenchOptions::new().with_seed(99);

    let first = run(&MeanEngine, &configs, &options).unwrap();
    let second = run(&MeanEngine, &configs, &options).unwrap();

    // Scores are seed-deterministic; wall-clock times are not.
    assert_eq!(first[0].mean_error(), second[0].mean_error());
}

#[test]
fn staging_matches_in_memory_run() {
    let dir = tempfile::tempdir().unwrap();
    let configs = [TrialConfig::new(ModelSpec::ar(3), 2, 120)];

    let in_memory = BenchOptions::new().with_seed(123);
    let staged = BenchOptions::new().with_seed(123).with_stage_dir(dir.path());

    let direct = run(&MeanEngine, &configs, &in_memory).unwrap();
    let through_files = run(&MeanEngine, &configs, &staged).unwrap();

    assert_eq!(direct[0].mean_error(), through_files[0].mean_error());
    assert!(dir.path().join("ar(3)_0.txt").exists());
    assert!(dir.path().join("ar(3)_1.txt").exists());
}

#[test]
fn zero_trial_config_fails_before_any_trial() {
    let dir = tempfile::tempdir().unwrap();
    let configs = [
        TrialConfig::new(ModelSpec::ar(2), 3, 100),
        TrialConfig::new(ModelSpec::ma(2), 0, 100),
    ];
    let options = BenchOptions::new().with_seed(5).with_stage_dir(dir.path());

    let result = run(&MeanEngine, &configs, &options);
    assert!(matches!(result, Err(BenchError::InvalidConfig { .. })));

    // Validation runs up front, so the valid first config never staged.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn generation_errors_fail_fast() {
    // Series length equal to the order cannot seed the recurrence.
    let configs = [TrialConfig::new(ModelSpec::ar(5), 1, 5)];
    let options = BenchOptions::new().with_seed(1);

    let result = run(&MeanEngine, &configs, &options);
    assert!(matches!(
        result,
        Err(BenchError::Synth(SynthError::InvalidLength { n: 5, min: 6 }))
    ));
}

#[test]
fn timeout_skips_every_trial() {
    let configs = [TrialConfig::new(ModelSpec::ar(1), 3, 2000)];
    let options = BenchOptions::new()
        .with_seed(8)
        .with_timeout(Duration::from_nanos(1));

    let summaries = run(&MeanEngine, &configs, &options).unwrap();
    let summary = &summaries[0];
    assert_eq!(summary.n_trials(), 0);
    assert_eq!(summary.n_skipped(), 3);
    assert_eq!(summary.mean_error(), None);
}
