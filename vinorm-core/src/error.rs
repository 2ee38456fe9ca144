//! Error types for the normalization engine

use thiserror::Error;

/// Errors surfaced by the normalization pipeline
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Dictionary configuration problem detected at startup
    #[error("configuration error in {path}: {reason}")]
    Configuration {
        /// Path of the offending dictionary file
        path: String,
        /// Human-readable description of the problem
        reason: String,
    },

    /// The external word segmenter failed on an input line
    #[error("segmenter error: {0}")]
    ExternalService(String),

    /// I/O error while reading dictionaries or input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for normalization operations
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Error raised by a [`Segment`](crate::Segment) implementation.
///
/// Adapters wrap whatever their backing service reports into this
/// type; the engine maps it to [`NormalizeError::ExternalService`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SegmentError(pub String);

impl From<SegmentError> for NormalizeError {
    fn from(err: SegmentError) -> Self {
        NormalizeError::ExternalService(err.0)
    }
}
