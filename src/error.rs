//! Error types for the conversion run.
//!
//! This module provides the [`ExtractError`] type for all conversion
//! operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for the MARC-to-CSV conversion.
///
/// Every variant is fatal to the run: the only recoverable condition in the
/// pipeline (a publication date with no year-shaped substring) is handled
/// in place with the `NULL` sentinel and never surfaces here.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A decoded record carries no 001 control field, so the row cannot be
    /// keyed. The run stops rather than emit an unidentified row.
    #[error("record has no 001 control number")]
    MissingControlNumber,

    /// Decoder-level failure while reading ISO 2709 data.
    #[error("MARC error: {0}")]
    Marc(#[from] mrrc::MarcError),

    /// Failure while writing the header or a data row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure while serializing the subject-heading list.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
