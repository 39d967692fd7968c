//! Leap years, month lengths, and Gauss's day-of-week algorithm.
//!
//! Everything here is proleptic: no year range is enforced, and all
//! remainders are Euclidean so negative years stay well defined.

use crate::consts::{CENTURY_CYCLE, DAYS_PER_WEEK, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use crate::types::{Month, Weekday};

pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
        && (year.rem_euclid(CENTURY_CYCLE) != 0 || year.rem_euclid(GREGORIAN_CYCLE) == 0)
}

/// Number of days in `month` of `year`
pub const fn day_count(month: Month, year: i32) -> u8 {
    month.day_count(is_leap_year(year))
}

/// Day of the week of `day` `month` `year`, by Gauss's algorithm.
///
/// `day` is not checked against the month length.
pub fn weekday(day: u8, month: Month, year: i32) -> Weekday {
    let offset = month.offset().for_year(is_leap_year(year));
    let y = year - 1;

    let w = (i32::from(day)
        + i32::from(offset)
        + 5 * y.rem_euclid(LEAP_YEAR_CYCLE)
        + 4 * y.rem_euclid(CENTURY_CYCLE)
        + 6 * y.rem_euclid(GREGORIAN_CYCLE))
    .rem_euclid(DAYS_PER_WEEK);

    // Remainder 0 is Sunday; rotate so that it lands on the last slot
    Weekday::ALL[((w + 6) % DAYS_PER_WEEK).unsigned_abs() as usize]
}

/// Following month, wrapping December to January
pub const fn next_month(month: Month) -> Month {
    month.next()
}

/// Preceding month, wrapping January to December
pub const fn prev_month(month: Month) -> Month {
    month.prev()
}
