//! Month sheets: the grid of day cells a calendar view renders.
//!
//! A sheet is laid out Monday-first in rows of seven. Leading cells show the
//! tail of the previous month and trailing cells the start of the next one.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::arithmetic::{day_count, prev_month, weekday};
use crate::consts::{
    DEFAULT_CELL_COUNT, FIRST_WEEKDAY_CALIBRATION, MAX_CELL_COUNT, MIN_CELL_COUNT, MIN_YEAR,
    REFORM_FIRST_DAY, REFORM_MONTH,
};
use crate::holiday::{holidays_in, Holiday};
use crate::prelude::*;
use crate::types::{Month, Year};
use crate::CalendarError;

/// One day cell of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Day of month shown in the cell; `None` for cells cleared by the 1582 reform gap
    pub display_day:   Option<u8>,
    /// True when the day belongs to the sheet's month
    pub current_month: bool,
    pub holiday:       Option<Holiday>,
}

impl Cell {
    /// A cell with no day, no holiday, outside the month
    pub const BLANK: Self = Self {
        display_day:   None,
        current_month: false,
        holiday:       None,
    };

    const fn day(day: u8, current_month: bool) -> Self {
        Self {
            display_day: Some(day),
            current_month,
            holiday: None,
        }
    }

    /// Label of the holiday on this day, if any
    pub fn holiday_label(&self) -> Option<&'static str> {
        self.holiday.map(Holiday::label)
    }
}

/// Sheet layout settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    /// Number of cells to produce, `MIN_CELL_COUNT..=MAX_CELL_COUNT`
    pub cell_count: usize,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
        }
    }
}

impl SheetOptions {
    /// Checks that the cell count can hold every month
    ///
    /// # Errors
    /// Returns `CalendarError::CellCount` if `cell_count` is outside `MIN_CELL_COUNT..=MAX_CELL_COUNT`.
    pub fn validate(self) -> Result<Self, CalendarError> {
        if self.cell_count < MIN_CELL_COUNT || self.cell_count > MAX_CELL_COUNT {
            return Err(CalendarError::CellCount(self.cell_count));
        }
        Ok(self)
    }
}

/// The cells of one month, in display order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Serialize, Deserialize)]
pub struct CalendarSheet {
    month:               Month,
    year:                Year,
    first_weekday_index: i32,
    #[deref]
    cells:               Vec<Cell>,
}

impl CalendarSheet {
    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    /// Index of the last leading cell from the previous month (-1 when the month starts on Monday)
    pub const fn first_weekday_index(&self) -> i32 {
        self.first_weekday_index
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Days of the sheet's month in display order
    pub fn current_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.current_month)
            .filter_map(|cell| cell.display_day)
    }
}

impl IntoIterator for CalendarSheet {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Builds the sheet for `month` of `year` with `cell_count` cells.
///
/// # Errors
/// Returns `CalendarError::CellCount` if `cell_count` cannot hold a whole month,
/// and propagates holiday resolution errors.
pub fn build_sheet(month: Month, year: Year, cell_count: usize) -> Result<CalendarSheet, CalendarError> {
    let options = SheetOptions { cell_count }.validate()?;
    let count = i32::try_from(options.cell_count).map_err(|_| CalendarError::CellCount(cell_count))?;

    let first = i32::from(weekday(1, month, year.get()).number()) + FIRST_WEEKDAY_CALIBRATION;
    let days = i32::from(day_count(month, year.get()));
    let days_prev = i32::from(day_count(prev_month(month), year.get()));

    debug!(%month, year = year.get(), first_weekday_index = first, cell_count, "building calendar sheet");

    let mut cells: Vec<Cell> = (0..count)
        .map(|i| {
            let (value, current) = if i <= first {
                (days_prev - first + i, false)
            } else if i <= first + days {
                (i - first, true)
            } else {
                (i - first - days, false)
            };
            u8::try_from(value).map_or(Cell::BLANK, |day| Cell::day(day, current))
        })
        .collect();

    for holiday in holidays_in(month, year)? {
        let date = holiday.date(year)?;
        let index = i32::from(date.day) + first;
        if let Some(cell) = usize::try_from(index).ok().and_then(|i| cells.get_mut(i)) {
            trace!(%holiday, cell = index, "placing holiday label");
            cell.holiday = Some(holiday);
        }
    }

    if month.number() == REFORM_MONTH && year.get() == MIN_YEAR {
        apply_reform_gap(&mut cells);
    }

    Ok(CalendarSheet {
        month,
        year,
        first_weekday_index: first,
        cells,
    })
}

/// Clears every cell before October 15th, 1582, the first Gregorian day
fn apply_reform_gap(cells: &mut [Cell]) {
    let Some(end) = cells
        .iter()
        .position(|cell| cell.current_month && cell.display_day == Some(REFORM_FIRST_DAY))
    else {
        return;
    };

    debug!(cleared = end, "applying Gregorian reform gap");
    for cell in &mut cells[..end] {
        *cell = Cell::BLANK;
    }
}
