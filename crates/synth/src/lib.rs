//! Synthetic AR, MA, and ARMA signal generation.
//!
//! This crate produces labeled time series whose generating process is known
//! exactly: an autoregressive, moving-average, or combined recurrence of
//! configurable order, driven by Gaussian innovations of configurable scale.
//! Coefficients can be fixed or drawn fresh per trial.
//!
//! # Quick start
//!
//! ```rust
//! use metron_synth::{GeneratorConfig, ProcessSpec, generate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let spec = ProcessSpec::draw_ar(5, 0.15, 0.05, &mut rng)?;
//! let series = generate(&spec, 100, &GeneratorConfig::new(), &mut rng)?;
//! assert_eq!(series.len(), 100);
//! # Ok::<(), metron_synth::SynthError>(())
//! ```

mod config;
mod error;
mod generate;
mod spec;

pub use config::{GeneratorConfig, Warmup};
pub use error::SynthError;
pub use generate::generate;
pub use spec::ProcessSpec;
