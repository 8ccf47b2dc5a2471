use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Metron configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetronConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Runner settings.
    #[serde(default)]
    pub bench: BenchToml,

    /// Signal generator settings.
    #[serde(default)]
    pub generator: GeneratorToml,

    /// Benchmark suite rows, one per model configuration.
    #[serde(default)]
    pub configs: Vec<ConfigToml>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl MetronConfig {
    /// Loads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchToml {
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default = "default_split_ratio")]
    pub split_ratio: f64,
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default = "default_series_len")]
    pub series_len: usize,
    #[serde(default = "default_coeff_scale")]
    pub coeff_scale: f64,
    #[serde(default = "default_noise")]
    pub noise: f64,
    /// Per-trial fit+predict budget in milliseconds; unset means no limit.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Route each generated series through the dataset store under
    /// `[output].dir` before splitting.
    #[serde(default)]
    pub stage: bool,
}

impl Default for BenchToml {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            metric: default_metric(),
            split_ratio: default_split_ratio(),
            trials: default_trials(),
            series_len: default_series_len(),
            coeff_scale: default_coeff_scale(),
            noise: default_noise(),
            timeout_ms: None,
            stage: false,
        }
    }
}

fn default_engine() -> String {
    "css".to_string()
}
fn default_metric() -> String {
    "mse".to_string()
}
fn default_split_ratio() -> f64 {
    0.8
}
fn default_trials() -> usize {
    5
}
fn default_series_len() -> usize {
    1000
}
fn default_coeff_scale() -> f64 {
    0.15
}
fn default_noise() -> f64 {
    0.05
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorToml {
    #[serde(default)]
    pub baseline: f64,
    #[serde(default = "default_warmup")]
    pub warmup: String,
    #[serde(default)]
    pub ma_noise_in_arma: bool,
}

impl Default for GeneratorToml {
    fn default() -> Self {
        Self {
            baseline: 0.0,
            warmup: default_warmup(),
            ma_noise_in_arma: false,
        }
    }
}

fn default_warmup() -> String {
    "uniform".to_string()
}

/// One benchmark suite row. `p`/`q` requirements depend on `family`:
/// `ar` needs `p`, `ma` needs `q`, `arma` needs both.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    pub family: String,
    #[serde(default)]
    pub p: Option<usize>,
    #[serde(default)]
    pub q: Option<usize>,
    #[serde(default)]
    pub trials: Option<usize>,
    #[serde(default)]
    pub series_len: Option<usize>,
    #[serde(default)]
    pub coeff_scale: Option<f64>,
    #[serde(default)]
    pub noise: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Directory for generated dataset files and staged series.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Optional path for the JSON benchmark report.
    #[serde(default)]
    pub json: Option<PathBuf>,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            json: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}
