use anyhow::{Context, Result, bail};
use tracing::info;

use metron_bench::Report;

use crate::cli::BenchArgs;
use crate::config::MetronConfig;
use crate::convert;

/// Run the benchmark suite and render the report.
pub fn run(args: BenchArgs) -> Result<()> {
    let config = MetronConfig::load(&args.config)?;

    let engine_name = args.engine.unwrap_or_else(|| config.bench.engine.clone());
    let engine = convert::build_engine(&engine_name)?;

    let trial_configs = convert::build_trial_configs(&config)?;
    if trial_configs.is_empty() {
        bail!("no [[configs]] rows in {}", args.config.display());
    }
    let options = convert::build_bench_options(&config, args.seed)?;

    if let Some(dir) = options.stage_dir() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create staging dir: {}", dir.display()))?;
    }

    info!(
        engine = engine.name(),
        n_configs = trial_configs.len(),
        "starting benchmark"
    );
    let summaries = metron_bench::run(engine.as_ref(), &trial_configs, &options)
        .context("benchmark run failed")?;

    let report = Report::new(engine.name(), options.metric().name(), summaries);
    print!("{}", report.to_table());

    if let Some(path) = args.json.or_else(|| config.output.json.clone()) {
        let json = report.to_json().context("failed to serialize report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "json report written");
    }

    Ok(())
}
