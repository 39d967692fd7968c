use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CELL_COUNT, PERIOD_SEPARATOR, REFORM_MONTH};
use crate::holiday::{holidays_in, Holiday};
use crate::prelude::*;
use crate::sheet::{build_sheet, CalendarSheet, SheetOptions};
use crate::types::{Month, Year};
use crate::{CalendarError, ParseError};

/// A month of a year a calendar view can display.
/// Valid from October 1582, the first Gregorian month, through December 3000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.number()")]
pub struct Period {
    year:  Year,
    month: Month,
}

impl Period {
    /// The first displayable period, October 1582
    pub const FIRST: Self = Self {
        year:  Year::MIN,
        month: Month::October,
    };

    /// The last displayable period, December 3000
    pub const LAST: Self = Self {
        year:  Year::MAX,
        month: Month::December,
    };

    /// Creates a new period with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::PeriodOutOfRange` for months of 1582 before October.
    pub fn new(month: Month, year: Year) -> Result<Self, CalendarError> {
        let period = Self { year, month };
        if period < Self::FIRST || period > Self::LAST {
            return Err(CalendarError::PeriodOutOfRange {
                month,
                year: year.get(),
            });
        }
        Ok(period)
    }

    /// Period containing the local current date
    ///
    /// # Errors
    /// Returns a range error if the system clock lies outside the supported years.
    pub fn today() -> Result<Self, CalendarError> {
        Self::containing(Local::now().date_naive())
    }

    /// Period containing `date`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` or `CalendarError::PeriodOutOfRange`
    /// if the date lies outside October 1582 through December 3000.
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        let year = Year::new(date.year())?;
        let month = u8::try_from(date.month())
            .map_err(|_| CalendarError::Domain {
                kind:  "month",
                value: i64::from(date.month()),
            })
            .and_then(Month::from_number)?;
        Self::new(month, year)
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns both components as a tuple
    pub const fn parts(&self) -> (Month, Year) {
        (self.month, self.year)
    }

    /// True unless this is the last displayable period
    pub fn has_next(&self) -> bool {
        *self != Self::LAST
    }

    /// True unless this is the first displayable period
    pub fn has_prev(&self) -> bool {
        *self != Self::FIRST
    }

    /// The following month
    ///
    /// # Errors
    /// Returns a range error when called on [`Period::LAST`].
    pub fn next(&self) -> Result<Self, CalendarError> {
        let (month, year) = next_period(self.month, self.year)?;
        Self::new(month, year)
    }

    /// The preceding month
    ///
    /// # Errors
    /// Returns a range error when called on [`Period::FIRST`].
    pub fn prev(&self) -> Result<Self, CalendarError> {
        let (month, year) = prev_period(self.month, self.year)?;
        Self::new(month, year)
    }

    /// Holidays in this period, in calendar order
    ///
    /// # Errors
    /// See [`holidays_in`].
    pub fn holidays(&self) -> Result<Vec<Holiday>, CalendarError> {
        holidays_in(self.month, self.year)
    }

    /// Sheet with the default number of cells
    ///
    /// # Errors
    /// See [`build_sheet`].
    pub fn sheet(&self) -> Result<CalendarSheet, CalendarError> {
        build_sheet(self.month, self.year, DEFAULT_CELL_COUNT)
    }

    /// Sheet laid out with `options`
    ///
    /// # Errors
    /// See [`build_sheet`].
    pub fn sheet_with(&self, options: SheetOptions) -> Result<CalendarSheet, CalendarError> {
        build_sheet(self.month, self.year, options.cell_count)
    }
}

/// Month after `month`, rolling the year over after December
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` past December 3000.
pub fn next_period(month: Month, year: Year) -> Result<(Month, Year), CalendarError> {
    let next = month.next();
    let year = if next == Month::January {
        Year::new(year.get() + 1)?
    } else {
        year
    };
    Ok((next, year))
}

/// Month before `month`, rolling the year back before January
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` before January 1582.
pub fn prev_period(month: Month, year: Year) -> Result<(Month, Year), CalendarError> {
    let prev = month.prev();
    let year = if prev == Month::December {
        Year::new(year.get() - 1)?
    } else {
        year
    };
    Ok((prev, year))
}

/// Months a month selector offers for `year`: only October through December in 1582
pub fn selectable_months(year: Year) -> &'static [Month] {
    if year == Year::MIN {
        &Month::ALL[usize::from(REFORM_MONTH - 1)..]
    } else {
        &Month::ALL
    }
}

impl FromStr for Period {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let (year_str, month_str) = trimmed.split_once(PERIOD_SEPARATOR).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "No period separator found (expected '{PERIOD_SEPARATOR}'): {s}"
            ))
        })?;

        let year = year_str.parse::<Year>()?;
        let month_number = month_str
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(month_str.to_owned()))?;
        let month = Month::from_number(month_number)?;

        Self::new(month, year)
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
