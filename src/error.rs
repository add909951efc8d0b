//! Error types shared by every metric and encoder.

use thiserror::Error;

/// Errors raised by metrics with preconditions.
///
/// Every failure is local and synchronous: nothing here is transient, so
/// callers should treat these as input errors rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Hamming distance is only defined for strings of equal length
    #[error("strings must have equal length, got {left} and {right} characters")]
    LengthMismatch { left: usize, right: usize },

    /// A parameter or identifier is outside its valid domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SimilarityError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimilarityError>;
