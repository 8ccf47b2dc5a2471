use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use metron_dataset::write_series;
use metron_model::{ModelFamily, ModelSpec};
use metron_synth::ProcessSpec;

use crate::cli::GenerateArgs;
use crate::config::MetronConfig;
use crate::convert;

/// Run the dataset generation pipeline: one file per configured trial.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = MetronConfig::load(&args.config)?;

    let trial_configs = convert::build_trial_configs(&config)?;
    if trial_configs.is_empty() {
        bail!("no [[configs]] rows in {}", args.config.display());
    }
    let generator = convert::build_generator_config(&config.generator)?;

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let out_dir = args.output.unwrap_or_else(|| config.output.dir.clone());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output dir: {}", out_dir.display()))?;

    let mut n_files = 0;
    for trial_config in &trial_configs {
        trial_config.validate()?;
        let spec = trial_config.spec();

        for i in 0..trial_config.trials() {
            let process = draw_process(spec, trial_config.coeff_scale(), trial_config.noise(), &mut rng)?;
            let series =
                metron_synth::generate(&process, trial_config.series_len(), &generator, &mut rng)
                    .with_context(|| format!("generation failed for {spec}"))?;

            let path = out_dir.join(format!("{}_{i}.txt", spec.to_string().to_lowercase()));
            write_series(&path, &series)
                .with_context(|| format!("failed to write dataset: {}", path.display()))?;
            n_files += 1;
        }
        info!(model = %spec, files = trial_config.trials(), "dataset files written");
    }

    info!(dir = %out_dir.display(), n_files, "generation complete");
    Ok(())
}

/// Draws a concrete process matching the model family of `spec`.
fn draw_process(
    spec: ModelSpec,
    coeff_scale: f64,
    noise: f64,
    rng: &mut StdRng,
) -> Result<ProcessSpec> {
    let process = match spec.family() {
        ModelFamily::Ar => ProcessSpec::draw_ar(spec.p(), coeff_scale, noise, rng)?,
        ModelFamily::Ma => ProcessSpec::draw_ma(spec.q(), coeff_scale, noise, rng)?,
        ModelFamily::Arma => ProcessSpec::draw_arma(spec.p(), spec.q(), coeff_scale, noise, rng)?,
    };
    Ok(process)
}
