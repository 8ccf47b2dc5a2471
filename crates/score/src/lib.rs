//! # metron-score
//!
//! Forecast accuracy metrics: MSE and RMSE over paired forecast/truth
//! windows.
//!
//! ```
//! use metron_score::{Metric, rmse};
//!
//! let truth = [1.0, 2.0, 3.0];
//! let forecast = [1.0, 2.0, 4.0];
//!
//! let direct = rmse(&forecast, &truth)?;
//! let dispatched = Metric::Rmse.score(&forecast, &truth)?;
//! assert_eq!(direct, dispatched);
//! # Ok::<(), metron_score::ScoreError>(())
//! ```

mod error;
mod metric;

pub use error::ScoreError;
pub use metric::{Metric, mse, rmse};
