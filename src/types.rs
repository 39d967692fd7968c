use crate::consts::{DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;
use crate::{CalendarError, ParseError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A year guaranteed to be in the supported range `MIN_YEAR..=MAX_YEAR` (1582..=3000)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// First supported year (1582)
    pub const MIN: Self = Self(MIN_YEAR);
    /// Last supported year (3000)
    pub const MAX: Self = Self(MAX_YEAR);

    /// Creates a new Year, validating that it lies in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the value is outside the supported range.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        if value < MIN_YEAR || value > MAX_YEAR {
            return Err(CalendarError::YearOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns true if this is a leap year
    #[inline]
    pub const fn is_leap(self) -> bool {
        crate::arithmetic::is_leap_year(self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// Parses the contents of a year entry field.
///
/// Only ASCII digits are accepted (no sign, no separators); surrounding
/// whitespace is ignored.
impl FromStr for Year {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()).into());
        }
        // All digits but too long for i32 is still a range problem, not a format one
        let value = trimmed.parse::<i32>().unwrap_or(i32::MAX);
        Self::new(value)
    }
}

/// Gaussian month offsets for common and leap years, each in `0..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthOffset {
    pub common_year: u8,
    pub leap_year:   u8,
}

impl MonthOffset {
    const fn new(common_year: u8, leap_year: u8) -> Self {
        Self {
            common_year,
            leap_year,
        }
    }

    /// Returns the offset that applies to a year with the given leap status
    #[inline]
    pub const fn for_year(self, leap: bool) -> u8 {
        if leap { self.leap_year } else { self.common_year }
    }
}

/// Month of the year, numbered 1 (January) to 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the month for a 1-based ordinal
    ///
    /// # Errors
    /// Returns `CalendarError::Domain` if the value is not in `1..=12`.
    pub fn from_number(value: u8) -> Result<Self, CalendarError> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(CalendarError::Domain {
                kind:  "month",
                value: i64::from(value),
            })
    }

    /// Returns the 1-based month ordinal
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English month name
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Number of days in this month; only February depends on `leap`
    pub const fn day_count(self, leap: bool) -> u8 {
        match self {
            Self::February if leap => FEBRUARY_DAYS_LEAP,
            _ => DAYS_IN_MONTH[self as usize],
        }
    }

    /// Gaussian weekday offsets for this month
    pub const fn offset(self) -> MonthOffset {
        match self {
            Self::January => MonthOffset::new(0, 0),
            Self::February => MonthOffset::new(3, 3),
            Self::March => MonthOffset::new(3, 4),
            Self::April => MonthOffset::new(6, 0),
            Self::May => MonthOffset::new(1, 2),
            Self::June => MonthOffset::new(4, 5),
            Self::July => MonthOffset::new(6, 0),
            Self::August => MonthOffset::new(2, 3),
            Self::September => MonthOffset::new(5, 6),
            Self::October => MonthOffset::new(0, 1),
            Self::November => MonthOffset::new(3, 4),
            Self::December => MonthOffset::new(5, 6),
        }
    }

    /// Following month, wrapping December to January
    pub const fn next(self) -> Self {
        Self::ALL[self as usize % 12]
    }

    /// Preceding month, wrapping January to December
    pub const fn prev(self) -> Self {
        Self::ALL[(self as usize + 10) % 12]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// Parses an English month name, ignoring case and surrounding whitespace
impl FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownMonth(trimmed.to_owned()))
    }
}

/// Day of the week, numbered 1 (Monday) to 7 (Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the weekday for its number (1 = Monday … 7 = Sunday)
    ///
    /// # Errors
    /// Returns `CalendarError::Domain` if the value is not in `1..=7`.
    pub fn from_number(value: u8) -> Result<Self, CalendarError> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(CalendarError::Domain {
                kind:  "weekday",
                value: i64::from(value),
            })
    }

    /// Maps a remainder of the Gauss weekday formula, where 0 is Sunday
    ///
    /// # Errors
    /// Returns `CalendarError::Domain` if the value is not in `0..=6`.
    pub fn from_gauss_remainder(value: i32) -> Result<Self, CalendarError> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            _ => Err(CalendarError::Domain {
                kind:  "weekday remainder",
                value: i64::from(value),
            }),
        }
    }

    /// Returns the weekday number (1 = Monday … 7 = Sunday)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns true for Saturday and Sunday
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

/// A day and month; the year is carried alongside by the caller
///
/// The day is not checked against the month length, which depends on the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{month} {day}")]
pub struct CalendarDate {
    // month first so the derived ordering is chronological
    pub month: Month,
    pub day:   u8,
}

impl CalendarDate {
    pub const fn new(day: u8, month: Month) -> Self {
        Self { day, month }
    }
}
