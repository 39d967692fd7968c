/// Minimum supported year (inclusive), the year the Gregorian calendar was introduced
pub const MIN_YEAR: i32 = 1582;

/// Maximum supported year (inclusive)
pub const MAX_YEAR: i32 = 3000;

/// Ordinal of the first month of the Gregorian calendar (October 1582)
pub const REFORM_MONTH: u8 = 10;

/// First day of the Gregorian calendar; October 5-14, 1582 never happened
pub const REFORM_FIRST_DAY: u8 = 15;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week, the modulus of the weekday calculation
pub(crate) const DAYS_PER_WEEK: i32 = 7;

/// Shift between `Weekday::number()` of the 1st and the index of the last
/// leading cell in a Monday-first sheet. Calibrated against the grid; do not
/// re-derive.
pub const FIRST_WEEKDAY_CALIBRATION: i32 = -2;

/// Cells in a default sheet (six rows of seven days)
pub const DEFAULT_CELL_COUNT: usize = 42;

/// Smallest sheet that always holds a whole month: six leading cells plus 31 days
pub const MIN_CELL_COUNT: usize = 37;

/// Largest sheet: seven rows of seven days
pub const MAX_CELL_COUNT: usize = 49;

/// Period separator (ISO 8601 year-month)
pub const PERIOD_SEPARATOR: char = '-';
