//! Process specifications for synthetic series.

use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::SynthError;

/// Describes the generating process behind a synthetic series.
///
/// Coefficients are ordered most-recent-lag first: `coeffs[0]` weights the
/// value (or innovation) one step back, `coeffs[1]` two steps back, and so
/// on. `noise` is the standard deviation of the innovation term.
///
/// Specs are either built directly from known coefficients or drawn fresh
/// per trial via [`ProcessSpec::draw_ar`] and friends. They describe how a
/// series is generated and are never persisted; only realised values are
/// written out.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessSpec {
    /// Autoregressive process of order `coeffs.len()`.
    Ar {
        /// AR coefficients, most recent lag first.
        coeffs: Vec<f64>,
        /// Innovation standard deviation.
        noise: f64,
    },
    /// Moving-average process of order `coeffs.len()`.
    Ma {
        /// MA coefficients, most recent innovation first.
        coeffs: Vec<f64>,
        /// Innovation standard deviation.
        noise: f64,
    },
    /// Sum of an AR component and an MA component, each driven by its own
    /// innovation sequence.
    Arma {
        /// AR coefficients, most recent lag first.
        ar: Vec<f64>,
        /// MA coefficients, most recent innovation first.
        ma: Vec<f64>,
        /// Innovation standard deviation, shared by both components.
        noise: f64,
    },
}

impl ProcessSpec {
    /// Draws an AR(p) spec with coefficients sampled from `N(0, coeff_scale)`.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidOrder`] if `p == 0`,
    /// [`SynthError::InvalidScale`] if `coeff_scale` is negative or
    /// non-finite, and [`SynthError::InvalidNoise`] if `noise` is negative
    /// or non-finite.
    pub fn draw_ar<R: Rng>(
        p: usize,
        coeff_scale: f64,
        noise: f64,
        rng: &mut R,
    ) -> Result<Self, SynthError> {
        if p == 0 {
            return Err(SynthError::InvalidOrder);
        }
        validate_noise(noise)?;
        Ok(Self::Ar {
            coeffs: draw_coeffs(p, coeff_scale, rng)?,
            noise,
        })
    }

    /// Draws an MA(q) spec with coefficients sampled from `N(0, coeff_scale)`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProcessSpec::draw_ar`], with `q` in place of `p`.
    pub fn draw_ma<R: Rng>(
        q: usize,
        coeff_scale: f64,
        noise: f64,
        rng: &mut R,
    ) -> Result<Self, SynthError> {
        if q == 0 {
            return Err(SynthError::InvalidOrder);
        }
        validate_noise(noise)?;
        Ok(Self::Ma {
            coeffs: draw_coeffs(q, coeff_scale, rng)?,
            noise,
        })
    }

    /// Draws an ARMA(p,q) spec with both coefficient sets sampled from
    /// `N(0, coeff_scale)`. AR coefficients are drawn before MA coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidOrder`] if `p` and `q` are both zero;
    /// scale and noise validation as in [`ProcessSpec::draw_ar`].
    pub fn draw_arma<R: Rng>(
        p: usize,
        q: usize,
        coeff_scale: f64,
        noise: f64,
        rng: &mut R,
    ) -> Result<Self, SynthError> {
        if p == 0 && q == 0 {
            return Err(SynthError::InvalidOrder);
        }
        validate_noise(noise)?;
        Ok(Self::Arma {
            ar: draw_coeffs(p, coeff_scale, rng)?,
            ma: draw_coeffs(q, coeff_scale, rng)?,
            noise,
        })
    }

    /// Returns the AR order (number of lagged values the process depends on).
    pub fn p(&self) -> usize {
        match self {
            Self::Ar { coeffs, .. } => coeffs.len(),
            Self::Ma { .. } => 0,
            Self::Arma { ar, .. } => ar.len(),
        }
    }

    /// Returns the MA order (number of lagged innovations the process depends on).
    pub fn q(&self) -> usize {
        match self {
            Self::Ar { .. } => 0,
            Self::Ma { coeffs, .. } => coeffs.len(),
            Self::Arma { ma, .. } => ma.len(),
        }
    }

    /// Returns the overall order `max(p, q)`.
    pub fn order(&self) -> usize {
        self.p().max(self.q())
    }

    /// Returns the innovation standard deviation.
    pub fn noise(&self) -> f64 {
        match self {
            Self::Ar { noise, .. } | Self::Ma { noise, .. } | Self::Arma { noise, .. } => *noise,
        }
    }

    /// Validates this spec.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidOrder`] if the spec has no coefficients
    /// at all, or [`SynthError::InvalidNoise`] if the noise scale is
    /// negative or non-finite. Coefficient values themselves are taken as
    /// given.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.p() == 0 && self.q() == 0 {
            return Err(SynthError::InvalidOrder);
        }
        validate_noise(self.noise())
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ar { coeffs, .. } => write!(f, "AR({})", coeffs.len()),
            Self::Ma { coeffs, .. } => write!(f, "MA({})", coeffs.len()),
            Self::Arma { ar, ma, .. } => write!(f, "ARMA({},{})", ar.len(), ma.len()),
        }
    }
}

fn validate_noise(sigma: f64) -> Result<(), SynthError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(SynthError::InvalidNoise { sigma });
    }
    Ok(())
}

fn draw_coeffs<R: Rng>(k: usize, scale: f64, rng: &mut R) -> Result<Vec<f64>, SynthError> {
    if !scale.is_finite() || scale < 0.0 {
        return Err(SynthError::InvalidScale { scale });
    }
    let normal = Normal::new(0.0, scale).map_err(|_| SynthError::InvalidScale { scale })?;
    Ok((0..k).map(|_| normal.sample(rng)).collect())
}
