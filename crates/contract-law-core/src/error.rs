//! Error types for contract records
//!
//! Record operations are total over their inputs; errors only arise from
//! loading documents and from the strict date policy.

use chrono::NaiveDate;

/// Contract record error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Effective date falls after the expiration date
    #[error("Invalid date range: effective date {effective} is after expiration date {expiration}")]
    InvalidDateRange {
        effective: NaiveDate,
        expiration: NaiveDate,
    },

    /// Malformed contract document
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

/// Result type alias for contract record operations
pub type Result<T> = std::result::Result<T, Error>;
