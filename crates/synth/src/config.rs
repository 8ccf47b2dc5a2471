//! Configuration for synthetic series generation.

/// Distribution of the warm-up samples that seed an AR recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warmup {
    /// Uniform draws on `[0, 1)`.
    Uniform,
    /// Gaussian draws with the spec's noise scale, `N(0, sigma)`.
    Gaussian,
    /// All warm-up samples exactly zero.
    Zeros,
}

/// Configuration for series generation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use metron_synth::{GeneratorConfig, Warmup};
///
/// let config = GeneratorConfig::new()
///     .with_baseline(7.0)
///     .with_warmup(Warmup::Zeros);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    baseline: f64,
    warmup: Warmup,
    ma_noise_in_arma: bool,
}

impl GeneratorConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `baseline = 0.0`, `warmup = Warmup::Uniform`,
    /// `ma_noise_in_arma = false`.
    pub fn new() -> Self {
        Self {
            baseline: 0.0,
            warmup: Warmup::Uniform,
            ma_noise_in_arma: false,
        }
    }

    /// Sets the additive constant of the AR recurrence.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the warm-up distribution for the first `p` AR samples.
    pub fn with_warmup(mut self, warmup: Warmup) -> Self {
        self.warmup = warmup;
        self
    }

    /// Sets whether the MA component of an ARMA series adds its own
    /// per-step noise term on top of the lagged innovations.
    pub fn with_ma_noise_in_arma(mut self, enabled: bool) -> Self {
        self.ma_noise_in_arma = enabled;
        self
    }

    // --- Accessors ---

    /// Returns the additive constant of the AR recurrence.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Returns the warm-up distribution.
    pub fn warmup(&self) -> Warmup {
        self.warmup
    }

    /// Returns whether the MA component of an ARMA series carries its own
    /// per-step noise term.
    pub fn ma_noise_in_arma(&self) -> bool {
        self.ma_noise_in_arma
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GeneratorConfig::new();
        assert_eq!(cfg.baseline(), 0.0);
        assert_eq!(cfg.warmup(), Warmup::Uniform);
        assert!(!cfg.ma_noise_in_arma());
    }

    #[test]
    fn builder_chaining() {
        let cfg = GeneratorConfig::new()
            .with_baseline(7.0)
            .with_warmup(Warmup::Zeros)
            .with_ma_noise_in_arma(true);

        assert_eq!(cfg.baseline(), 7.0);
        assert_eq!(cfg.warmup(), Warmup::Zeros);
        assert!(cfg.ma_noise_in_arma());
    }

    #[test]
    fn default_trait_matches_new() {
        let a = GeneratorConfig::default();
        let b = GeneratorConfig::new();
        assert_eq!(a.baseline(), b.baseline());
        assert_eq!(a.warmup(), b.warmup());
        assert_eq!(a.ma_noise_in_arma(), b.ma_noise_in_arma());
    }
}
