//! Native estimation engine: least squares for AR, conditional sum of
//! squares for MA and ARMA.
//!
//! AR models are fitted by ordinary least squares on the lag design matrix
//! of the centred training data. MA and ARMA models minimise the
//! conditional-sum-of-squares Gaussian likelihood over
//! `[mu, phi_1..phi_p, theta_1..theta_q]` with Nelder-Mead, conditioning on
//! zero pre-sample residuals.

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use ndarray::{Array1, Array2};

use crate::engine::{FitEngine, FittedModel};
use crate::error::ModelError;
use crate::spec::{ModelFamily, ModelSpec};

/// The native estimation engine.
///
/// Use the builder methods to customise the optimizer budget.
#[derive(Clone, Copy, Debug)]
pub struct CssEngine {
    max_iters: u64,
    sd_tolerance: f64,
}

impl CssEngine {
    /// Creates an engine with defaults: `max_iters = 10_000`,
    /// `sd_tolerance = 1e-8`.
    pub fn new() -> Self {
        Self {
            max_iters: 10_000,
            sd_tolerance: 1e-8,
        }
    }

    /// Sets the Nelder-Mead iteration cap.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the Nelder-Mead standard-deviation termination tolerance.
    pub fn with_sd_tolerance(mut self, tolerance: f64) -> Self {
        self.sd_tolerance = tolerance;
        self
    }

    /// Returns the Nelder-Mead iteration cap.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the Nelder-Mead termination tolerance.
    pub fn sd_tolerance(&self) -> f64 {
        self.sd_tolerance
    }

    /// Fits `spec` to the training window, returning the concrete fit.
    ///
    /// This is the typed counterpart of the [`FitEngine::fit`] trait
    /// method; use it when coefficient accessors are needed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`FitEngine::fit`].
    pub fn fit_model(&self, train: &[f64], spec: ModelSpec) -> Result<CssFit, ModelError> {
        validate(train, spec)?;

        let est = match spec.family() {
            ModelFamily::Ar => fit_ar_ols(train, spec.p())?,
            ModelFamily::Ma | ModelFamily::Arma => {
                self.fit_css(train, spec.p(), spec.q())?
            }
        };

        // Forecast state: lagged deviations and residuals, most recent first.
        let n = train.len();
        let lag_obs: Vec<f64> = (0..est.phi.len()).map(|i| train[n - 1 - i] - est.mu).collect();
        let lag_resid: Vec<f64> = (0..est.theta.len())
            .map(|j| est.residuals[n - 1 - j])
            .collect();

        Ok(CssFit {
            spec,
            mu: est.mu,
            phi: est.phi,
            theta: est.theta,
            sigma2: est.sigma2,
            lag_obs,
            lag_resid,
        })
    }

    /// MA/ARMA path: minimise the CSS negative log-likelihood.
    fn fit_css(&self, train: &[f64], p: usize, q: usize) -> Result<Estimate, ModelError> {
        // Simplex: origin plus one unit vertex per dimension, scaled 0.5.
        let dim = 1 + p + q;
        let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
        simplex.push(vec![0.0; dim]);
        for i in 0..dim {
            let mut vertex = vec![0.0; dim];
            vertex[i] = 0.5;
            simplex.push(vertex);
        }

        let cost = CssCost { data: train, p, q };

        let solver = NelderMead::new(simplex)
            .with_sd_tolerance(self.sd_tolerance)
            .map_err(|_| ModelError::DidNotConverge)?;
        let result = Executor::new(cost, solver)
            .configure(|state| state.max_iters(self.max_iters))
            .run()
            .map_err(|_| ModelError::DidNotConverge)?;

        let best = result
            .state()
            .best_param
            .as_ref()
            .ok_or(ModelError::DidNotConverge)?;
        if best.iter().any(|x| !x.is_finite()) {
            return Err(ModelError::DidNotConverge);
        }

        let mu = best[0];
        let phi = best[1..1 + p].to_vec();
        let theta = best[1 + p..].to_vec();

        let (residuals, sse) = css_residuals(train, mu, &phi, &theta);
        let n_eff = (train.len() - p.max(q)) as f64;
        let sigma2 = sse / n_eff;
        if !sigma2.is_finite() {
            return Err(ModelError::DidNotConverge);
        }

        Ok(Estimate {
            mu,
            phi,
            theta,
            residuals,
            sigma2,
        })
    }
}

impl Default for CssEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FitEngine for CssEngine {
    fn name(&self) -> &'static str {
        "css"
    }

    fn fit(&self, train: &[f64], spec: ModelSpec) -> Result<Box<dyn FittedModel>, ModelError> {
        Ok(Box::new(self.fit_model(train, spec)?))
    }
}

/// A model fitted by [`CssEngine`].
///
/// Holds the estimated mean, AR (`phi`) and MA (`theta`) coefficients,
/// innovation variance, and the training-tail state needed for chained
/// forecasting.
#[derive(Clone, Debug)]
pub struct CssFit {
    spec: ModelSpec,
    mu: f64,
    phi: Vec<f64>,
    theta: Vec<f64>,
    sigma2: f64,
    lag_obs: Vec<f64>,
    lag_resid: Vec<f64>,
}

impl CssFit {
    /// Returns the estimated process mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the AR coefficients (`phi`), most recent lag first.
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// Returns the MA coefficients (`theta`), most recent residual first.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Returns the estimated innovation variance.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }
}

impl FittedModel for CssFit {
    fn spec(&self) -> ModelSpec {
        self.spec
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>, ModelError> {
        if horizon == 0 {
            return Err(ModelError::InvalidHorizon);
        }

        let mut lag_obs = self.lag_obs.clone();
        let mut lag_resid = self.lag_resid.clone();
        let mut out = Vec::with_capacity(horizon);

        for _ in 0..horizon {
            let mut centred = 0.0;
            for (i, &ph) in self.phi.iter().enumerate() {
                centred += ph * lag_obs[i];
            }
            for (j, &th) in self.theta.iter().enumerate() {
                centred += th * lag_resid[j];
            }
            out.push(self.mu + centred);

            // The prediction feeds back as the newest lag; future residuals
            // are zero by conditioning.
            if !lag_obs.is_empty() {
                lag_obs.rotate_right(1);
                lag_obs[0] = centred;
            }
            if !lag_resid.is_empty() {
                lag_resid.rotate_right(1);
                lag_resid[0] = 0.0;
            }
        }

        Ok(out)
    }
}

/// Intermediate estimation output shared by the OLS and CSS paths.
struct Estimate {
    mu: f64,
    phi: Vec<f64>,
    theta: Vec<f64>,
    residuals: Vec<f64>,
    sigma2: f64,
}

fn validate(train: &[f64], spec: ModelSpec) -> Result<(), ModelError> {
    if train.is_empty() {
        return Err(ModelError::EmptyTrain);
    }
    if train.iter().any(|x| !x.is_finite()) {
        return Err(ModelError::NonFiniteTrain);
    }
    let (p, q) = (spec.p(), spec.q());
    let min_len = p.max(q).max(1) + 1;
    if (p == 0 && q == 0) || train.len() < min_len {
        return Err(ModelError::InvalidOrder {
            p,
            q,
            n: train.len(),
        });
    }
    Ok(())
}

/// AR path: ordinary least squares on the lag design of the centred data.
fn fit_ar_ols(train: &[f64], p: usize) -> Result<Estimate, ModelError> {
    let n = train.len();
    let mu = train.iter().sum::<f64>() / n as f64;
    let centred: Vec<f64> = train.iter().map(|x| x - mu).collect();

    // Row r predicts centred[r + p] from the p preceding values,
    // most recent lag in column 0.
    let rows = n - p;
    let mut design = Array2::zeros((rows, p));
    let mut target = Array1::zeros(rows);
    for r in 0..rows {
        for c in 0..p {
            design[[r, c]] = centred[r + p - 1 - c];
        }
        target[r] = centred[r + p];
    }

    let xtx = design.t().dot(&design);
    let xty = design.t().dot(&target);
    let phi = solve(xtx, xty)?;

    // One-step-ahead residuals over the training window.
    let mut residuals = vec![0.0; n];
    let mut sse = 0.0;
    for t in p..n {
        let mut pred = 0.0;
        for (i, &ph) in phi.iter().enumerate() {
            pred += ph * centred[t - 1 - i];
        }
        let e = centred[t] - pred;
        residuals[t] = e;
        sse += e * e;
    }
    let sigma2 = sse / rows as f64;

    Ok(Estimate {
        mu,
        phi,
        theta: vec![],
        residuals,
        sigma2,
    })
}

/// Solves `a * x = b` by Gaussian elimination with partial pivoting.
///
/// A near-zero pivot means the design is singular, which surfaces as
/// [`ModelError::DidNotConverge`].
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Vec<f64>, ModelError> {
    let k = b.len();

    for col in 0..k {
        let mut pivot = col;
        for r in (col + 1)..k {
            if a[[r, col]].abs() > a[[pivot, col]].abs() {
                pivot = r;
            }
        }
        if a[[pivot, col]].abs() < 1e-12 {
            return Err(ModelError::DidNotConverge);
        }
        if pivot != col {
            for c in 0..k {
                a.swap([col, c], [pivot, c]);
            }
            b.swap(col, pivot);
        }

        for r in (col + 1)..k {
            let factor = a[[r, col]] / a[[col, col]];
            for c in col..k {
                a[[r, c]] -= factor * a[[col, c]];
            }
            b[r] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; k];
    for col in (0..k).rev() {
        let mut sum = b[col];
        for c in (col + 1)..k {
            sum -= a[[col, c]] * x[c];
        }
        x[col] = sum / a[[col, col]];
    }
    Ok(x)
}

/// Runs the CSS residual recursion, conditioning on zero pre-sample
/// residuals. Returns the residual sequence and its sum of squares.
fn css_residuals(data: &[f64], mu: f64, phi: &[f64], theta: &[f64]) -> (Vec<f64>, f64) {
    let m = phi.len().max(theta.len());
    let mut residuals = vec![0.0; data.len()];
    let mut sse = 0.0;

    for t in m..data.len() {
        let mut pred = mu;
        for (i, &ph) in phi.iter().enumerate() {
            pred += ph * (data[t - 1 - i] - mu);
        }
        for (j, &th) in theta.iter().enumerate() {
            pred += th * residuals[t - 1 - j];
        }
        let e = data[t] - pred;
        residuals[t] = e;
        sse += e * e;
    }

    (residuals, sse)
}

/// Cost function for argmin: CSS negative log-likelihood.
struct CssCost<'a> {
    data: &'a [f64],
    p: usize,
    q: usize,
}

impl CostFunction for CssCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let mu = params[0];
        let phi = &params[1..1 + self.p];
        let theta = &params[1 + self.p..];

        let (_, sse) = css_residuals(self.data, mu, phi, theta);
        let n_eff = (self.data.len() - self.p.max(self.q)) as f64;
        let sigma2 = sse / n_eff;
        let nll = 0.5 * n_eff * (2.0 * std::f64::consts::PI * sigma2).ln() + 0.5 * sse / sigma2;

        if nll.is_finite() { Ok(nll) } else { Ok(f64::MAX) }
    }
}
