//! Report error types.

use chrono::NaiveDate;
use lekha_shared::AppError;
use thiserror::Error;

/// Errors that can occur during report generation.
///
/// The aggregation itself is total; these arise only at the boundary,
/// from caller input or the upstream document source.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The document source failed.
    #[error("Document source error: {0}")]
    Source(#[from] AppError),
}
