//! # metron-model
//!
//! Time-series model fitting behind a swappable engine boundary.
//!
//! ## Engine Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ModelSpec::arma(p, q)"] -->|"engine.fit(train, spec)?"| B["Box&lt;dyn FittedModel&gt;"]
//!     B -->|".predict(horizon)?"| C["Vec&lt;f64&gt; forecast"]
//!     D["CssEngine"] -.->|"implements FitEngine"| B
//!     E["MeanEngine"] -.->|"implements FitEngine"| B
//! ```
//!
//! ## Two Engines
//!
//! **Native estimation** ([`CssEngine`]): least squares for AR models,
//! conditional-sum-of-squares likelihood with Nelder-Mead for MA and ARMA.
//!
//! **Baseline** ([`MeanEngine`]): forecasts the training mean at every
//! step; the floor any real engine must beat.
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | mu | [`CssFit::mu()`] | Estimated process mean |
//! | phi | [`CssFit::phi()`] | AR coefficients: weights on past observations |
//! | theta | [`CssFit::theta()`] | MA coefficients: weights on past forecast errors |
//! | sigma2 | [`CssFit::sigma2()`] | Innovation (white-noise) variance |

mod css;
mod engine;
mod error;
mod mean;
mod spec;

pub use css::{CssEngine, CssFit};
pub use engine::{FitEngine, FittedModel};
pub use error::ModelError;
pub use mean::{MeanEngine, MeanFit};
pub use spec::{ModelFamily, ModelSpec};
