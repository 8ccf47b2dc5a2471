//! Error types for the metron-synth crate.

/// Error type for all fallible operations in the metron-synth crate.
///
/// Covers specification and length validation failures raised while drawing
/// process coefficients or generating synthetic series.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthError {
    /// Returned when a process specification has no coefficients at all.
    #[error("process has no coefficients (p = 0 and q = 0)")]
    InvalidOrder,

    /// Returned when the requested series length cannot cover the process order.
    #[error("series length {n} is too short: need at least {min} samples")]
    InvalidLength {
        /// Requested series length.
        n: usize,
        /// Minimum length for the process order.
        min: usize,
    },

    /// Returned when the noise scale is negative or non-finite.
    #[error("noise scale must be finite and non-negative, got {sigma}")]
    InvalidNoise {
        /// The rejected noise scale.
        sigma: f64,
    },

    /// Returned when the coefficient scale is negative or non-finite.
    #[error("coefficient scale must be finite and non-negative, got {scale}")]
    InvalidScale {
        /// The rejected coefficient scale.
        scale: f64,
    },
}
