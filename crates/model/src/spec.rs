//! Model order descriptors.

use std::fmt;

/// The model family a spec belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Pure autoregressive model.
    Ar,
    /// Pure moving-average model.
    Ma,
    /// Combined autoregressive moving-average model.
    Arma,
}

/// An unfitted model specification: family plus `(p, q)` order.
///
/// Create one with [`ModelSpec::ar`], [`ModelSpec::ma`], or
/// [`ModelSpec::arma`], then hand it to a
/// [`FitEngine`](crate::FitEngine) together with training data.
///
/// # Example
///
/// ```
/// use metron_model::ModelSpec;
///
/// let spec = ModelSpec::arma(5, 5);
/// assert_eq!(spec.p(), 5);
/// assert_eq!(spec.q(), 5);
/// assert_eq!(spec.to_string(), "ARMA(5,5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelSpec {
    family: ModelFamily,
    p: usize,
    q: usize,
}

impl ModelSpec {
    /// Creates an AR(p) specification.
    pub fn ar(p: usize) -> Self {
        Self {
            family: ModelFamily::Ar,
            p,
            q: 0,
        }
    }

    /// Creates an MA(q) specification.
    pub fn ma(q: usize) -> Self {
        Self {
            family: ModelFamily::Ma,
            p: 0,
            q,
        }
    }

    /// Creates an ARMA(p,q) specification.
    pub fn arma(p: usize, q: usize) -> Self {
        Self {
            family: ModelFamily::Arma,
            p,
            q,
        }
    }

    /// Returns the model family.
    pub fn family(&self) -> ModelFamily {
        self.family
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns the overall order `max(p, q)`.
    pub fn order(&self) -> usize {
        self.p.max(self.q)
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family {
            ModelFamily::Ar => write!(f, "AR({})", self.p),
            ModelFamily::Ma => write!(f, "MA({})", self.q),
            ModelFamily::Arma => write!(f, "ARMA({},{})", self.p, self.q),
        }
    }
}
