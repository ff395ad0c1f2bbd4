//! Generator error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Generator-related errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Start date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid start date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// Rejected input.
        input: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },

    /// Period count must be positive.
    #[error("Periods must be positive, got {0}")]
    InvalidPeriod(i64),

    /// Last generated day falls outside the supported calendar.
    #[error("Date range starting {start} spanning {periods} days exceeds the supported calendar")]
    DateRangeOverflow {
        /// First day.
        start: NaiveDate,
        /// Requested day count.
        periods: i64,
    },

    /// Raw materials seasonal cycle must be at least one day.
    #[error("Seasonal cycle length must be positive")]
    InvalidSeasonLength,

    /// Profit margin is undefined because the day had no revenue.
    #[error("Profit margin undefined on {date}: total revenue is zero")]
    UndefinedMetric {
        /// Day with zero revenue.
        date: NaiveDate,
    },
}
