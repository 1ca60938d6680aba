//! Error types for sprint data validation.

use thiserror::Error;

/// Errors raised while validating loaded sprint data.
///
/// Both variants are recoverable. At startup they abort before the
/// terminal is put into raw mode; during a live reload the previous
/// sprint is kept and the new file is ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SprintDataError {
    /// The roster has no developers, so every aggregate would be zero.
    #[error("sprint has no developers")]
    NoData,

    /// A record is semantically broken (inverted dates, half-open leave).
    #[error("invalid sprint data: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SprintDataError>;
