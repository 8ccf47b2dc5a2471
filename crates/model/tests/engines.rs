//! Cross-engine tests through the `FitEngine` trait boundary, the way the
//! benchmark runner consumes the crate.

use metron_model::{CssEngine, FitEngine, MeanEngine, ModelError, ModelSpec};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Seeded AR(2) sample shared across tests.
fn ar2_series(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 0.5).unwrap();
    let mut data = vec![0.0; n];
    for t in 2..n {
        data[t] = 0.5 * data[t - 1] - 0.3 * data[t - 2] + normal.sample(&mut rng);
    }
    data
}

#[test]
fn engines_work_as_trait_objects() {
    let engines: Vec<Box<dyn FitEngine>> = vec![Box::new(CssEngine::new()), Box::new(MeanEngine)];
    let data = ar2_series(400, 11);
    let spec = ModelSpec::ar(2);

    for engine in &engines {
        let model = engine.fit(&data, spec).unwrap();
        assert_eq!(model.spec(), spec);

        let forecast = model.predict(40).unwrap();
        assert_eq!(forecast.len(), 40, "{} engine", engine.name());
        assert!(
            forecast.iter().all(|v| v.is_finite()),
            "{} engine produced a non-finite forecast",
            engine.name()
        );
    }
}

#[test]
fn engine_names_are_distinct() {
    assert_eq!(CssEngine::new().name(), "css");
    assert_eq!(MeanEngine::new().name(), "mean");
}

#[test]
fn css_handles_every_family() {
    let data = ar2_series(600, 29);
    let engine = CssEngine::new();

    for spec in [ModelSpec::ar(2), ModelSpec::ma(2), ModelSpec::arma(1, 1)] {
        let model = engine.fit(&data, spec).unwrap();
        assert_eq!(model.spec(), spec);
        assert_eq!(model.predict(10).unwrap().len(), 10);
    }
}

#[test]
fn errors_cross_the_boundary() {
    let engines: Vec<Box<dyn FitEngine>> = vec![Box::new(CssEngine::new()), Box::new(MeanEngine)];

    for engine in &engines {
        let result = engine.fit(&[], ModelSpec::ar(1));
        assert!(
            matches!(result, Err(ModelError::EmptyTrain)),
            "{} engine",
            engine.name()
        );
    }
}
