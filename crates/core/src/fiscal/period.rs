//! Reporting period types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date-bounded reporting window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First date of the period.
    pub start: NaiveDate,
    /// Last date of the period.
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a new reporting period.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if the period bounds are ordered.
    ///
    /// An inverted period is never an error for the pure aggregation
    /// functions (it simply matches no documents); callers that accept
    /// user input should reject one up front.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}
