//! # metron-bench
//!
//! Benchmark runner for time-series fitting engines: generates synthetic
//! AR/MA/ARMA series, fits a pluggable engine, and aggregates forecast
//! accuracy and timing per configuration.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["TrialConfig"] -->|"draw + generate"| B["series"]
//!     B -->|"optional staging"| C["dataset store"]
//!     C --> D["split"]
//!     B --> D
//!     D -->|"train"| E["engine.fit"]
//!     E -->|".predict(test.len())"| F["forecast"]
//!     D -->|"test"| G["score"]
//!     F --> G
//!     G --> H["ConfigSummary"]
//! ```
//!
//! Trials run sequentially; each draws its own seed from a master RNG so a
//! fixed seed reproduces the whole run. Non-convergence and timeout skip
//! the affected trial only.

mod config;
mod error;
mod report;
mod runner;

pub use config::{BenchOptions, TrialConfig};
pub use error::BenchError;
pub use report::Report;
pub use runner::{ConfigSummary, TrialRecord, run};
