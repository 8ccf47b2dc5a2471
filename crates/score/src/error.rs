use thiserror::Error;

/// Errors from forecast scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Forecast and truth windows have different lengths.
    #[error("forecast has {forecast} values but truth has {truth}")]
    LengthMismatch {
        /// Number of forecast values.
        forecast: usize,
        /// Number of ground-truth values.
        truth: usize,
    },

    /// Both windows are empty, so no error can be averaged.
    #[error("cannot score empty series")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ScoreError::LengthMismatch {
            forecast: 10,
            truth: 200,
        };
        assert_eq!(err.to_string(), "forecast has 10 values but truth has 200");
        assert_eq!(ScoreError::EmptyInput.to_string(), "cannot score empty series");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_std_error<E: std::error::Error>() {}
        assert_std_error::<ScoreError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoreError>();
    }
}
