use chrono::{Datelike, Months, NaiveDate};
use derive_more::Constructor;
use std::convert::TryInto;
use std::slice;

use crate::calendar::{self, WeekStart};
use crate::date::CalendarDate;
use crate::panel::PanelPosition;

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Month a cell belongs to, relative to the displayed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellOrigin {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct DateCell {
    date: NaiveDate,
    origin: CellOrigin,
}

impl DateCell {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month0(&self) -> u32 {
        self.date.month0()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn origin(&self) -> CellOrigin {
        self.origin
    }

    pub fn is_current(&self) -> bool {
        self.origin == CellOrigin::Current
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_same_day(&self, date: &CalendarDate) -> bool {
        self.date == date.naive_date()
    }
}

impl From<DateCell> for CalendarDate {
    fn from(cell: DateCell) -> Self {
        CalendarDate::from(cell.date)
    }
}

/// The 6x7 day grid of a panel, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    panel: PanelPosition,
    week_start: WeekStart,
    leading: usize,
    cells: [DateCell; GRID_CELLS],
}

impl Grid {
    /// Grid of `panel` with weeks starting on monday.
    pub fn for_panel(panel: PanelPosition) -> Self {
        build_grid(panel, WeekStart::default())
    }

    pub fn panel(&self) -> PanelPosition {
        self.panel
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn cells(&self) -> &[DateCell] {
        &self.cells
    }

    pub fn iter(&self) -> slice::Iter<'_, DateCell> {
        self.cells.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DateCell> {
        self.cells.get(index)
    }

    pub fn rows(&self) -> slice::Chunks<'_, DateCell> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// The contiguous run of cells belonging to the panel month.
    pub fn current_month(&self) -> &[DateCell] {
        &self.cells[self.leading..self.leading + self.panel.days() as usize]
    }

    pub fn leading_len(&self) -> usize {
        self.leading
    }

    pub fn trailing_len(&self) -> usize {
        GRID_CELLS - self.leading - self.panel.days() as usize
    }

    pub fn position(&self, date: &CalendarDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.is_same_day(date))
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a DateCell;
    type IntoIter = slice::Iter<'a, DateCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn month_cells(
    first: Option<NaiveDate>,
    days: impl Iterator<Item = u32>,
    origin: CellOrigin,
) -> impl Iterator<Item = DateCell> {
    days.filter_map(move |day| first?.with_day(day))
        .map(move |date| DateCell::new(date, origin))
}

/// Lays out the panel month on a fixed grid of 42 cells: the tail of the
/// previous month up to the column of the first, the whole month and as many
/// days of the following month as needed to fill six weeks.
///
/// # Panics
///
/// If the cells do not add up to exactly 42.
pub fn build_grid(panel: PanelPosition, week_start: WeekStart) -> Grid {
    let first = panel.first_day();
    let leading = week_start.column(&first);
    let days = panel.days();
    let trailing = GRID_CELLS as u32 - days - leading;

    let prev_days = calendar::days_in_month(panel.year(), panel.month0() as i32 - 1);

    let cells: Vec<DateCell> = month_cells(
        first.checked_sub_months(Months::new(1)),
        (prev_days - leading + 1)..=prev_days,
        CellOrigin::Previous,
    )
    .chain(month_cells(Some(first), 1..=days, CellOrigin::Current))
    .chain(month_cells(
        first.checked_add_months(Months::new(1)),
        1..=trailing,
        CellOrigin::Next,
    ))
    .collect();

    let cells: [DateCell; GRID_CELLS] = cells.try_into().unwrap_or_else(|cells: Vec<DateCell>| {
        panic!(
            "grid of {} has {} cells instead of {}",
            panel,
            cells.len(),
            GRID_CELLS
        )
    });

    Grid {
        panel,
        week_start,
        leading: leading as usize,
        cells,
    }
}
