use metron_dataset::DatasetError;
use metron_model::ModelError;
use metron_score::ScoreError;
use metron_synth::SynthError;
use thiserror::Error;

/// Errors from benchmark configuration and execution.
///
/// Stage failures keep their typed source so callers can match on the
/// underlying variant.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A benchmark configuration failed validation.
    #[error("invalid benchmark configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// Signal generation failed.
    #[error("generation failed: {0}")]
    Synth(SynthError),

    /// Staging a series through the dataset store failed.
    #[error("dataset staging failed: {0}")]
    Dataset(DatasetError),

    /// Model fitting or prediction failed in a non-recoverable way.
    #[error("model failed: {0}")]
    Model(ModelError),

    /// Scoring the forecast failed.
    #[error("scoring failed: {0}")]
    Score(ScoreError),
}

impl From<SynthError> for BenchError {
    fn from(err: SynthError) -> Self {
        BenchError::Synth(err)
    }
}

impl From<DatasetError> for BenchError {
    fn from(err: DatasetError) -> Self {
        BenchError::Dataset(err)
    }
}

impl From<ModelError> for BenchError {
    fn from(err: ModelError) -> Self {
        BenchError::Model(err)
    }
}

impl From<ScoreError> for BenchError {
    fn from(err: ScoreError) -> Self {
        BenchError::Score(err)
    }
}
