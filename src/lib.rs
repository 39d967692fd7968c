//! Proleptic-Gregorian calendar engine.
//!
//! Computes weekdays (Gauss), leap years, the twelve German national
//! holidays (Easter by Gauss's formula), and the day grid a calendar view
//! shows for a month. Supported years are 1582 through 3000; October 1582
//! starts on the 15th, the first day of the Gregorian calendar.
//!
//! ```
//! use gregorian_sheet::{build_sheet, Month, Year, DEFAULT_CELL_COUNT};
//!
//! let sheet = build_sheet(Month::December, Year::new(2024)?, DEFAULT_CELL_COUNT)?;
//! let christmas = sheet.iter().find(|cell| cell.holiday_label() == Some("Christmas"));
//! assert_eq!(christmas.and_then(|cell| cell.display_day), Some(25));
//! # Ok::<(), gregorian_sheet::CalendarError>(())
//! ```

mod arithmetic;
mod consts;
mod holiday;
mod period;
mod prelude;
mod sheet;
mod types;

pub use arithmetic::{day_count, is_leap_year, next_month, prev_month, weekday};
pub use consts::*;
pub use holiday::{easter_offset, holiday_date, holidays_in, resolve_offset_date, Holiday};
pub use period::{next_period, prev_period, selectable_months, Period};
pub use sheet::{build_sheet, CalendarSheet, Cell, SheetOptions};
pub use types::{CalendarDate, Month, MonthOffset, Weekday, Year};

use crate::prelude::*;

/// Errors from reading user-entered text
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Unknown month name: {_0}")]
    UnknownMonth(String),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Errors raised by the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// An integer that maps to no case of a closed domain.
    #[error("Unmapped {kind} value: {value}")]
    Domain { kind: &'static str, value: i64 },

    /// Year outside the supported range.
    #[error("Year {0} outside supported range {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),

    /// Month of a supported year that precedes the Gregorian calendar.
    #[error("Period {month} {year} outside October {min} to December {max}", min = MIN_YEAR, max = MAX_YEAR)]
    PeriodOutOfRange { month: Month, year: i32 },

    /// Sheet too small to hold a month, or larger than seven rows.
    #[error("Invalid cell count {0} (must be {min}-{max})", min = MIN_CELL_COUNT, max = MAX_CELL_COUNT)]
    CellCount(usize),

    /// Error parsing text input.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
