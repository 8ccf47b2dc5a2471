//! Error types for metron-dataset.

use std::path::PathBuf;

/// Error type for all fallible operations in the metron-dataset crate.
///
/// Covers filesystem failures, numeric parse failures while reading a
/// series file, and invalid train/test split ratios.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a token in a series file is not a valid real number.
    #[error("invalid number '{token}' at token {position} in {}", path.display())]
    Parse {
        /// The offending token.
        token: String,
        /// 1-based position of the token in the file.
        position: usize,
        /// Path to the file being read.
        path: PathBuf,
    },

    /// Wraps any other filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a split ratio falls outside the open interval (0, 1).
    #[error("split ratio must be in (0, 1), got {ratio}")]
    InvalidRatio {
        /// The rejected ratio.
        ratio: f64,
    },
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = DatasetError::NotFound {
            path: PathBuf::from("/tmp/missing.txt"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.txt");
    }

    #[test]
    fn display_parse() {
        let err = DatasetError::Parse {
            token: "abc".to_string(),
            position: 3,
            path: PathBuf::from("/data/ar(5)_0.txt"),
        };
        assert_eq!(
            err.to_string(),
            "invalid number 'abc' at token 3 in /data/ar(5)_0.txt"
        );
    }

    #[test]
    fn display_io() {
        let err = DatasetError::Io {
            reason: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "io error: permission denied");
    }

    #[test]
    fn display_invalid_ratio() {
        let err = DatasetError::InvalidRatio { ratio: 1.5 };
        assert_eq!(err.to_string(), "split ratio must be in (0, 1), got 1.5");
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<DatasetError>();
    }
}
