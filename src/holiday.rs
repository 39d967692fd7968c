//! German national holidays and the Gaussian Easter algorithm.
//!
//! Movable feasts are computed as offsets from Easter Sunday, expressed as
//! the "nth of March" (32 is April 1st, and so on).

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::types::{CalendarDate, Month, Year};
use crate::CalendarError;

/// Months an nth-of-March value is resolved through, in order
const RESOLUTION_MONTHS: [Month; 4] = [Month::March, Month::April, Month::May, Month::June];

/// A German national holiday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Holiday {
    #[display(fmt = "New Year's Day")]
    NewYear,
    #[display(fmt = "Good Friday")]
    GoodFriday,
    #[display(fmt = "Easter")]
    Easter,
    #[display(fmt = "Easter Monday")]
    EasterMonday,
    #[display(fmt = "May Day")]
    MayDay,
    #[display(fmt = "Ascension Day")]
    AscensionDay,
    #[display(fmt = "Whit Sunday")]
    WhitSunday,
    #[display(fmt = "Whit Monday")]
    WhitMonday,
    #[display(fmt = "German Unity Day")]
    DayOfGermanUnity,
    #[display(fmt = "Reformation Day")]
    ReformationDay,
    #[display(fmt = "Christmas")]
    Christmas,
    #[display(fmt = "Boxing Day")]
    BoxingDay,
}

impl Holiday {
    /// All holidays in calendar order
    pub const ALL: [Self; 12] = [
        Self::NewYear,
        Self::GoodFriday,
        Self::Easter,
        Self::EasterMonday,
        Self::MayDay,
        Self::AscensionDay,
        Self::WhitSunday,
        Self::WhitMonday,
        Self::DayOfGermanUnity,
        Self::ReformationDay,
        Self::Christmas,
        Self::BoxingDay,
    ];

    /// Returns the English label shown on a calendar sheet
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewYear => "New Year's Day",
            Self::GoodFriday => "Good Friday",
            Self::Easter => "Easter",
            Self::EasterMonday => "Easter Monday",
            Self::MayDay => "May Day",
            Self::AscensionDay => "Ascension Day",
            Self::WhitSunday => "Whit Sunday",
            Self::WhitMonday => "Whit Monday",
            Self::DayOfGermanUnity => "German Unity Day",
            Self::ReformationDay => "Reformation Day",
            Self::Christmas => "Christmas",
            Self::BoxingDay => "Boxing Day",
        }
    }

    /// Date of this holiday in `year`
    ///
    /// # Errors
    /// See [`holiday_date`].
    pub fn date(self, year: Year) -> Result<CalendarDate, CalendarError> {
        holiday_date(self, year)
    }
}

/// Easter Sunday of `year` as the nth of March, by Gauss's Easter formula.
///
/// Divisions are floored and remainders Euclidean throughout.
pub const fn easter_offset(year: i32) -> i32 {
    // secular number
    let k = year.div_euclid(100);
    // secular moon shift
    let m = 15 + (3 * k + 3).div_euclid(4) - (8 * k + 13).div_euclid(25);
    // secular sun shift
    let s = 2 - (3 * k + 3).div_euclid(4);
    // moon parameter
    let a = year.rem_euclid(19);
    // seed for the first full moon in spring
    let d = (19 * a + m).rem_euclid(30);
    // calendar correction
    let r = (d + a.div_euclid(11)).div_euclid(29);
    // Easter border (paschal full moon)
    let og = 21 + d - r;
    // first Sunday in March
    let sz = 7 - (year + year.div_euclid(4) + s).rem_euclid(7);
    // distance from the border to Easter Sunday
    let oe = 7 - (og - sz).rem_euclid(7);

    og + oe
}

/// Converts an nth-of-March value into a day and month.
///
/// Values past June fall through to July.
///
/// # Errors
/// Returns `CalendarError::Domain` if the value is below 1 or lies beyond July.
pub fn resolve_offset_date(nth_of_march: i32) -> Result<CalendarDate, CalendarError> {
    let unresolvable = || CalendarError::Domain {
        kind:  "nth of March",
        value: i64::from(nth_of_march),
    };

    if nth_of_march < 1 {
        return Err(unresolvable());
    }

    let mut remaining = nth_of_march;
    // None of these months depend on the leap year
    for month in RESOLUTION_MONTHS {
        let days = i32::from(month.day_count(false));
        if remaining <= days {
            let day = u8::try_from(remaining).map_err(|_| unresolvable())?;
            return Ok(CalendarDate::new(day, month));
        }
        remaining -= days;
    }

    if remaining > i32::from(Month::July.day_count(false)) {
        return Err(unresolvable());
    }
    let day = u8::try_from(remaining).map_err(|_| unresolvable())?;
    Ok(CalendarDate::new(day, Month::July))
}

/// Date of `holiday` in `year`
///
/// # Errors
/// Returns `CalendarError::Domain` if an Easter-relative date cannot be
/// resolved, which does not happen for any supported year.
pub fn holiday_date(holiday: Holiday, year: Year) -> Result<CalendarDate, CalendarError> {
    let easter_relative = |distance: i32| resolve_offset_date(easter_offset(year.get()) + distance);

    match holiday {
        Holiday::NewYear => Ok(CalendarDate::new(1, Month::January)),
        Holiday::GoodFriday => easter_relative(-2),
        Holiday::Easter => easter_relative(0),
        Holiday::EasterMonday => easter_relative(1),
        Holiday::MayDay => Ok(CalendarDate::new(1, Month::May)),
        Holiday::AscensionDay => easter_relative(39),
        Holiday::WhitSunday => easter_relative(49),
        Holiday::WhitMonday => easter_relative(50),
        Holiday::DayOfGermanUnity => Ok(CalendarDate::new(3, Month::October)),
        Holiday::ReformationDay => Ok(CalendarDate::new(31, Month::October)),
        Holiday::Christmas => Ok(CalendarDate::new(25, Month::December)),
        Holiday::BoxingDay => Ok(CalendarDate::new(26, Month::December)),
    }
}

/// Holidays falling in `month` of `year`, in calendar order
///
/// # Errors
/// Propagates errors from [`holiday_date`].
pub fn holidays_in(month: Month, year: Year) -> Result<Vec<Holiday>, CalendarError> {
    let mut holidays = Vec::new();
    for holiday in Holiday::ALL {
        if holiday_date(holiday, year)?.month == month {
            holidays.push(holiday);
        }
    }
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::weekday;
    use crate::test_utils::year;
    use crate::types::Weekday;

    fn date(day: u8, month: Month) -> CalendarDate {
        CalendarDate::new(day, month)
    }

    #[test]
    fn test_easter_known_years() {
        let cases = [
            (1583, date(10, Month::April)),
            (1818, date(22, Month::March)),
            (1943, date(25, Month::April)),
            (2000, date(23, Month::April)),
            (2008, date(23, Month::March)),
            (2019, date(21, Month::April)),
            (2024, date(31, Month::March)),
            (2025, date(20, Month::April)),
            (2038, date(25, Month::April)),
        ];

        for (y, expected) in cases {
            assert_eq!(
                resolve_offset_date(easter_offset(y)).unwrap(),
                expected,
                "Easter {y}"
            );
        }
    }

    #[test]
    fn test_easter_offset_raw_values() {
        assert_eq!(easter_offset(2024), 31);
        assert_eq!(easter_offset(2025), 51);
    }

    #[test]
    fn test_resolve_offset_date_boundaries() {
        struct TestCase {
            nth:      i32,
            expected: CalendarDate,
        }

        let cases = [
            TestCase {
                nth:      1,
                expected: date(1, Month::March),
            },
            TestCase {
                nth:      31,
                expected: date(31, Month::March),
            },
            TestCase {
                nth:      32,
                expected: date(1, Month::April),
            },
            TestCase {
                nth:      61,
                expected: date(30, Month::April),
            },
            TestCase {
                nth:      62,
                expected: date(1, Month::May),
            },
            TestCase {
                nth:      93,
                expected: date(1, Month::June),
            },
            TestCase {
                nth:      122,
                expected: date(30, Month::June),
            },
            TestCase {
                nth:      123,
                expected: date(1, Month::July),
            },
            TestCase {
                nth:      153,
                expected: date(31, Month::July),
            },
        ];

        for case in &cases {
            assert_eq!(
                resolve_offset_date(case.nth),
                Ok(case.expected),
                "nth of March {}",
                case.nth
            );
        }
    }

    #[test]
    fn test_resolve_offset_date_rejects_malformed() {
        for nth in [0, -5, 154, i32::MAX] {
            assert!(
                matches!(
                    resolve_offset_date(nth),
                    Err(CalendarError::Domain {
                        kind: "nth of March",
                        ..
                    })
                ),
                "nth of March {nth}"
            );
        }
    }

    #[test]
    fn test_holiday_dates_2024() {
        let y = year(2024);
        let expected = [
            (Holiday::NewYear, date(1, Month::January)),
            (Holiday::GoodFriday, date(29, Month::March)),
            (Holiday::Easter, date(31, Month::March)),
            (Holiday::EasterMonday, date(1, Month::April)),
            (Holiday::MayDay, date(1, Month::May)),
            (Holiday::AscensionDay, date(9, Month::May)),
            (Holiday::WhitSunday, date(19, Month::May)),
            (Holiday::WhitMonday, date(20, Month::May)),
            (Holiday::DayOfGermanUnity, date(3, Month::October)),
            (Holiday::ReformationDay, date(31, Month::October)),
            (Holiday::Christmas, date(25, Month::December)),
            (Holiday::BoxingDay, date(26, Month::December)),
        ];

        for (holiday, expected) in expected {
            assert_eq!(holiday_date(holiday, y), Ok(expected), "{holiday} 2024");
            assert_eq!(holiday.date(y), Ok(expected));
        }
    }

    #[test]
    fn test_movable_holidays_keep_their_weekday() {
        for y in [1582, 1700, 1999, 2024, 2025, 2500, 3000] {
            let checks = [
                (Holiday::GoodFriday, Weekday::Friday),
                (Holiday::Easter, Weekday::Sunday),
                (Holiday::EasterMonday, Weekday::Monday),
                (Holiday::AscensionDay, Weekday::Thursday),
                (Holiday::WhitSunday, Weekday::Sunday),
                (Holiday::WhitMonday, Weekday::Monday),
            ];
            for (holiday, expected) in checks {
                let d = holiday_date(holiday, year(y)).unwrap();
                assert_eq!(weekday(d.day, d.month, y), expected, "{holiday} {y}");
            }
        }
    }

    #[test]
    fn test_holidays_in_months() {
        let y = year(2024);
        assert_eq!(holidays_in(Month::January, y), Ok(vec![Holiday::NewYear]));
        assert_eq!(holidays_in(Month::February, y), Ok(Vec::new()));
        assert_eq!(
            holidays_in(Month::March, y),
            Ok(vec![Holiday::GoodFriday, Holiday::Easter])
        );
        assert_eq!(holidays_in(Month::April, y), Ok(vec![Holiday::EasterMonday]));
        assert_eq!(
            holidays_in(Month::May, y),
            Ok(vec![
                Holiday::MayDay,
                Holiday::AscensionDay,
                Holiday::WhitSunday,
                Holiday::WhitMonday
            ])
        );
        assert_eq!(
            holidays_in(Month::October, y),
            Ok(vec![Holiday::DayOfGermanUnity, Holiday::ReformationDay])
        );
    }

    #[test]
    fn test_late_easter_pushes_whitsun_into_june() {
        // Easter 2038 is April 25th
        let y = year(2038);
        assert_eq!(holiday_date(Holiday::WhitSunday, y), Ok(date(13, Month::June)));
        assert_eq!(
            holidays_in(Month::June, y),
            Ok(vec![Holiday::AscensionDay, Holiday::WhitSunday, Holiday::WhitMonday])
        );
    }

    #[test]
    fn test_december_always_christmas_and_boxing_day() {
        for y in (1582..=3000).step_by(37) {
            assert_eq!(
                holidays_in(Month::December, year(y)),
                Ok(vec![Holiday::Christmas, Holiday::BoxingDay]),
                "December {y}"
            );
        }
    }

    #[test]
    fn test_labels() {
        for holiday in Holiday::ALL {
            assert_eq!(holiday.to_string(), holiday.label());
        }
        assert_eq!(Holiday::DayOfGermanUnity.label(), "German Unity Day");
    }
}
