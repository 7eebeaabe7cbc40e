//! Calendar grid and date text core of a date picker.
//!
//! Everything in here is a pure computation on plain values: the 42 day grid
//! of a month panel, panel navigation and the `DD-MM-YYYY` text codec. The
//! [`picker::DatePicker`] ties them together into the open/closed state
//! machine a user interface drives.

pub mod calendar;
pub mod cmds;
pub mod codec;
pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod panel;
pub mod picker;
pub mod view;

pub use calendar::{days_in_month, WeekStart};
pub use codec::{format_date, parse_date};
pub use date::CalendarDate;
pub use error::{Error, ErrorKind, Result};
pub use grid::{build_grid, CellOrigin, DateCell, Grid};
pub use panel::PanelPosition;
pub use picker::DatePicker;
