//! Error types for the metron-model crate.

/// Error type for all fallible operations in the metron-model crate.
///
/// Covers training-data validation, estimation failures, and forecast
/// horizon validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// Returned when the training data is empty.
    #[error("training data is empty")]
    EmptyTrain,

    /// Returned when the training data contains non-finite values (NaN or infinity).
    #[error("training data contains non-finite values")]
    NonFiniteTrain,

    /// Returned when the requested order cannot be estimated from the
    /// training length, or when the order is empty.
    #[error("order (p={p}, q={q}) is not satisfiable with {n} training samples")]
    InvalidOrder {
        /// Requested AR order.
        p: usize,
        /// Requested MA order.
        q: usize,
        /// Number of training samples provided.
        n: usize,
    },

    /// Returned when estimation cannot produce finite coefficients: a
    /// singular design matrix, degenerate input, or optimizer failure.
    #[error("estimation did not converge")]
    DidNotConverge,

    /// Returned when a forecast of zero steps is requested.
    #[error("forecast horizon must be at least 1")]
    InvalidHorizon,
}
