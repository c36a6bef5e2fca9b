//! Custom error types for chipin
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Token decoding keeps a typed internal
//! failure set (`DecodeError`) that is collapsed into the single user-facing
//! `ChipInError::InvalidReceipt` at the serializer boundary, so the UI never
//! sees parser internals.

use thiserror::Error;

/// The main error type for chipin operations
#[derive(Error, Debug)]
pub enum ChipInError {
    /// Envelope could not be serialized (e.g. non-finite numeric fields)
    #[error("Encoding error: {0}")]
    Encode(String),

    /// The one decode error callers observe, regardless of internal cause
    #[error("Invalid or corrupted receipt data")]
    InvalidReceipt,

    /// Validation errors for user-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// CLI argument or usage errors
    #[error("{0}")]
    Cli(String),
}

/// Internal decode diagnostics
///
/// Each variant identifies the exact stage at which a token was rejected.
/// These are for diagnostics and logging only; public `decode` maps every
/// one of them to `ChipInError::InvalidReceipt`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The token was empty
    #[error("Receipt data is missing")]
    MissingData,

    /// The token is not valid base64url, not UTF-8, not JSON, or not the
    /// expected shape
    #[error("Corrupted receipt data: {0}")]
    Corrupted(String),

    /// The payload carries a schema version this build does not understand
    #[error("Unsupported receipt version: {0}")]
    UnsupportedVersion(u64),

    /// A structurally required field is absent
    #[error("Missing required field: {0}")]
    MissingFields(&'static str),
}

impl From<DecodeError> for ChipInError {
    fn from(_: DecodeError) -> Self {
        Self::InvalidReceipt
    }
}

impl ChipInError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for chipin operations
pub type ChipInResult<T> = Result<T, ChipInError>;
