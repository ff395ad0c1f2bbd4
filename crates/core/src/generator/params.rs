//! Validated generation parameters.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::error::GeneratorError;

/// Date format accepted for the start date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start date used when none is given.
pub const DEFAULT_START_DATE: &str = "2022-01-01";

/// Number of generated days used when none is given.
pub const DEFAULT_PERIODS: i64 = 365;

/// Length of the raw materials price cycle, in days.
///
/// Fixed at one calendar year independent of the generated period count.
pub const DEFAULT_RAW_MATERIALS_SEASON_DAYS: u32 = 365;

/// Parameters of a generation run.
///
/// Construction validates everything, so a `GeneratorParams` value always
/// describes a non-empty, representable date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratorParams {
    start_date: NaiveDate,
    end_date: NaiveDate,
    periods: usize,
    raw_materials_season_days: u32,
}

impl GeneratorParams {
    /// Parses a `YYYY-MM-DD` start date and validates the period count.
    pub fn new(start_date: &str, periods: i64) -> Result<Self, GeneratorError> {
        let parsed = NaiveDate::parse_from_str(start_date, DATE_FORMAT).map_err(|source| {
            GeneratorError::InvalidDate {
                input: start_date.to_string(),
                source,
            }
        })?;
        Self::from_start(parsed, periods)
    }

    /// Validates the period count against an already parsed start date.
    pub fn from_start(start_date: NaiveDate, periods: i64) -> Result<Self, GeneratorError> {
        if periods <= 0 {
            return Err(GeneratorError::InvalidPeriod(periods));
        }

        let overflow = || GeneratorError::DateRangeOverflow {
            start: start_date,
            periods,
        };
        let day_count = usize::try_from(periods).map_err(|_| overflow())?;
        let end_date = start_date
            .checked_add_days(Days::new(periods.unsigned_abs() - 1))
            .ok_or_else(overflow)?;

        Ok(Self {
            start_date,
            end_date,
            periods: day_count,
            raw_materials_season_days: DEFAULT_RAW_MATERIALS_SEASON_DAYS,
        })
    }

    /// Overrides the raw materials price cycle length.
    pub fn with_raw_materials_season_days(mut self, days: u32) -> Result<Self, GeneratorError> {
        if days == 0 {
            return Err(GeneratorError::InvalidSeasonLength);
        }
        self.raw_materials_season_days = days;
        Ok(self)
    }

    /// First generated day.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last generated day (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of generated days.
    #[must_use]
    pub const fn periods(&self) -> usize {
        self.periods
    }

    /// Raw materials price cycle length in days.
    #[must_use]
    pub const fn raw_materials_season_days(&self) -> u32 {
        self.raw_materials_season_days
    }
}

impl Default for GeneratorParams {
    /// One year of days starting at [`DEFAULT_START_DATE`].
    fn default() -> Self {
        const START: NaiveDate = ymd(2022, 1, 1);
        const END: NaiveDate = ymd(2022, 12, 31);
        Self {
            start_date: START,
            end_date: END,
            periods: 365,
            raw_materials_season_days: DEFAULT_RAW_MATERIALS_SEASON_DAYS,
        }
    }
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}
