use crate::calendar::WeekStart;
use crate::cmds::Cmd;
use crate::codec::{format_date, parse_date};
use crate::date::CalendarDate;
use crate::grid::{build_grid, DateCell, Grid};
use crate::panel::PanelPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Closed,
    Open(PanelPosition),
}

/// Headless model of the date picker: the selected date, the text in the
/// input and whether the popup is open on some panel.
///
/// Every method that commits a new selection returns it, everything else
/// returns `None`. The caller hands the returned date on to whoever owns the
/// value.
#[derive(Debug, Clone)]
pub struct DatePicker {
    selected: CalendarDate,
    text: String,
    state: PickerState,
    week_start: WeekStart,
}

impl DatePicker {
    pub fn new(selected: CalendarDate) -> Self {
        DatePicker {
            selected,
            text: format_date(&selected),
            state: PickerState::Closed,
            week_start: WeekStart::default(),
        }
    }

    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn selected(&self) -> CalendarDate {
        self.selected
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open(_))
    }

    pub fn panel(&self) -> Option<PanelPosition> {
        match self.state {
            PickerState::Open(panel) => Some(panel),
            PickerState::Closed => None,
        }
    }

    /// Grid of the open panel.
    pub fn grid(&self) -> Option<Grid> {
        self.panel().map(|panel| build_grid(panel, self.week_start))
    }

    pub fn is_selected(&self, cell: &DateCell) -> bool {
        cell.is_same_day(&self.selected)
    }

    /// The owner replaced the value from the outside.
    pub fn set_selected(&mut self, selected: CalendarDate) {
        self.selected = selected;
        self.text = format_date(&selected);
    }

    /// Text typed into the input. While the popup is open the panel follows
    /// any text that names a valid date.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_owned();

        if let PickerState::Open(panel) = self.state {
            if let Ok(date) = parse_date(&self.text) {
                let typed = PanelPosition::from(&date);
                if typed != panel {
                    log::debug!("Panel follows typed date to {}", typed);
                    self.state = PickerState::Open(typed);
                }
            }
        }
    }

    pub fn send_cmd(&mut self, cmd: Cmd) -> Option<CalendarDate> {
        match (cmd, self.state) {
            (Cmd::Open, PickerState::Closed) => {
                let panel = PanelPosition::from(&self.selected);
                log::debug!("Opening picker on {}", panel);
                self.state = PickerState::Open(panel);
                None
            }
            (Cmd::NextMonth, PickerState::Open(panel)) => self.move_to(panel.next_month()),
            (Cmd::PrevMonth, PickerState::Open(panel)) => self.move_to(panel.prev_month()),
            (Cmd::NextYear, PickerState::Open(panel)) => self.move_to(panel.next_year()),
            (Cmd::PrevYear, PickerState::Open(panel)) => self.move_to(panel.prev_year()),
            (Cmd::Commit, _) => self.commit_text(),
            (Cmd::Dismiss, PickerState::Open(_)) => self.commit_text(),
            (Cmd::Dismiss, PickerState::Closed) if self.text != format_date(&self.selected) => {
                self.commit_text()
            }
            (cmd, state) => {
                log::debug!("Ignoring '{}' in state {:?}", cmd, state);
                None
            }
        }
    }

    /// Click on cell `index` of the open grid.
    pub fn select_cell(&mut self, index: usize) -> Option<CalendarDate> {
        let cell = match self.grid().and_then(|grid| grid.get(index).copied()) {
            Some(cell) => cell,
            None => {
                log::debug!("No cell {} to select in state {:?}", index, self.state);
                return None;
            }
        };

        Some(self.commit(CalendarDate::from(cell)))
    }

    fn move_to(&mut self, panel: PanelPosition) -> Option<CalendarDate> {
        log::debug!("Moving panel to {}", panel);
        self.state = PickerState::Open(panel);
        None
    }

    fn commit_text(&mut self) -> Option<CalendarDate> {
        match parse_date(&self.text) {
            Ok(date) => Some(self.commit(date)),
            Err(err) => {
                log::warn!("{}, keeping {}", err, self.selected);
                self.text = format_date(&self.selected);
                self.state = PickerState::Closed;
                None
            }
        }
    }

    fn commit(&mut self, date: CalendarDate) -> CalendarDate {
        let date = date.with_time(self.selected.time());
        log::debug!("Selected {}", date);

        self.set_selected(date);
        self.state = PickerState::Closed;
        date
    }
}

pub fn is_today(cell: &DateCell, today: &CalendarDate) -> bool {
    cell.is_same_day(today)
}
