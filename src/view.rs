use itertools::Itertools;
use std::fmt;

use crate::config::Config;
use crate::date::CalendarDate;
use crate::grid::{DateCell, Grid, GRID_COLUMNS};

const CELL_WIDTH: usize = 3;
const ROW_WIDTH: usize = GRID_COLUMNS * (CELL_WIDTH + 1) - 1;

/// Plain text rendering of a [`Grid`]: a title, the weekday labels and six
/// rows of days. Every day is prefixed by a single marker character.
pub struct MonthView<'a> {
    grid: &'a Grid,
    selected: Option<CalendarDate>,
    today: Option<CalendarDate>,
    focus_symbol: Option<char>,
    today_symbol: Option<char>,
    outside_symbol: Option<char>,
}

impl<'a> MonthView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        MonthView {
            grid,
            selected: None,
            today: None,
            focus_symbol: Some('>'),
            today_symbol: Some('*'),
            outside_symbol: Some('.'),
        }
    }

    pub fn selected(mut self, date: CalendarDate) -> Self {
        self.selected = Some(date);
        self
    }

    pub fn today(mut self, date: CalendarDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn focus_symbol_opt(mut self, symbol_opt: Option<char>) -> Self {
        self.focus_symbol = symbol_opt;
        self
    }

    pub fn today_symbol_opt(mut self, symbol_opt: Option<char>) -> Self {
        self.today_symbol = symbol_opt;
        self
    }

    pub fn outside_symbol_opt(mut self, symbol_opt: Option<char>) -> Self {
        self.outside_symbol = symbol_opt;
        self
    }

    /// Takes all marker symbols from `config`.
    pub fn symbols(self, config: &Config) -> Self {
        self.focus_symbol_opt(config.focus_symbol)
            .today_symbol_opt(config.today_symbol)
            .outside_symbol_opt(config.outside_symbol)
    }

    fn marker(&self, cell: &DateCell) -> char {
        let is = |date: Option<CalendarDate>| date.map_or(false, |d| cell.is_same_day(&d));

        self.focus_symbol
            .filter(|_| is(self.selected))
            .or_else(|| self.today_symbol.filter(|_| is(self.today)))
            .or_else(|| self.outside_symbol.filter(|_| !cell.is_current()))
            .unwrap_or(' ')
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:^width$}",
            self.grid.panel().to_string(),
            width = ROW_WIDTH
        )?;

        writeln!(
            f,
            "{}",
            self.grid
                .week_start()
                .weekdays()
                .map(|day| format!("{:>width$}", day, width = CELL_WIDTH))
                .join(" ")
        )?;

        for row in self.grid.rows() {
            writeln!(
                f,
                "{}",
                row.iter()
                    .map(|cell| format!("{}{:>2}", self.marker(cell), cell.day()))
                    .join(" ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekStart;
    use crate::grid::build_grid;
    use crate::panel::PanelPosition;
    use chrono::Weekday;

    fn february_2024() -> Grid {
        Grid::for_panel(PanelPosition::new(2024, 1).unwrap())
    }

    #[test]
    fn renders_title_header_and_rows() {
        let grid = february_2024();
        let rendered = MonthView::new(&grid)
            .selected(CalendarDate::from_ymd(2024, 1, 29).unwrap())
            .today(CalendarDate::from_ymd(2024, 1, 14).unwrap())
            .to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].trim(), "February 2024");
        assert_eq!(lines[0].len(), ROW_WIDTH);
        assert_eq!(lines[1], "Mon Tue Wed Thu Fri Sat Sun");
        assert_eq!(lines[2], ".29 .30 .31   1   2   3   4");
        assert_eq!(lines[4], " 12  13 *14  15  16  17  18");
        assert_eq!(lines[6], " 26  27  28 >29 . 1 . 2 . 3");
        assert_eq!(lines[7], ". 4 . 5 . 6 . 7 . 8 . 9 .10");
    }

    #[test]
    fn selection_wins_over_today() {
        let grid = february_2024();
        let day = CalendarDate::from_ymd(2024, 1, 14).unwrap();
        let rendered = MonthView::new(&grid).selected(day).today(day).to_string();
        assert_eq!(rendered.lines().nth(4), Some(" 12  13 >14  15  16  17  18"));
    }

    #[test]
    fn symbols_can_be_disabled() {
        let grid = february_2024();
        let rendered = MonthView::new(&grid)
            .outside_symbol_opt(None)
            .today_symbol_opt(Some('!'))
            .today(CalendarDate::from_ymd(2024, 2, 1).unwrap())
            .to_string();
        assert_eq!(rendered.lines().nth(2), Some(" 29  30  31   1   2   3   4"));
        assert_eq!(rendered.lines().nth(7), Some("  4   5   6   7   8   9  10"));
        assert_eq!(rendered.lines().nth(6), Some(" 26  27  28  29 ! 1   2   3"));
    }

    #[test]
    fn symbols_from_config() {
        let grid = february_2024();
        let config = Config::from_toml("focus_symbol = \"#\"\noutside_symbol = \"~\"").unwrap();
        let rendered = MonthView::new(&grid)
            .symbols(&config)
            .selected(CalendarDate::from_ymd(2024, 5, 1).unwrap())
            .to_string();
        assert_eq!(rendered.lines().nth(2), Some("~29 ~30 ~31   1   2   3   4"));
        assert_eq!(rendered.lines().nth(3), Some("  5   6   7   8   9  10  11"));
        assert_eq!(rendered.lines().nth(7), Some("~ 4 ~ 5 ~ 6 ~ 7 ~ 8 ~ 9 ~10"));

        let rendered = MonthView::new(&grid)
            .symbols(&config)
            .selected(CalendarDate::from_ymd(2024, 1, 5).unwrap())
            .to_string();
        assert_eq!(rendered.lines().nth(3), Some("# 5   6   7   8   9  10  11"));
    }

    #[test]
    fn header_follows_week_start() {
        let grid = build_grid(
            PanelPosition::new(2024, 1).unwrap(),
            WeekStart::new(Weekday::Sun),
        );
        let rendered = MonthView::new(&grid).to_string();
        assert_eq!(rendered.lines().nth(1), Some("Sun Mon Tue Wed Thu Fri Sat"));
        assert_eq!(rendered.lines().nth(2), Some(".28 .29 .30 .31   1   2   3"));
    }
}
