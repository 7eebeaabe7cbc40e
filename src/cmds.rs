use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr)]
pub enum Cmd {
    Noop,
    Open,
    NextMonth,
    PrevMonth,
    NextYear,
    PrevYear,
    /// Enter in the text input.
    Commit,
    /// Focus lost or a click outside of the picker.
    Dismiss,
    Exit,
}

const CMD_NAMES: &[(&str, Cmd)] = &[
    ("noop", Cmd::Noop),
    ("open", Cmd::Open),
    ("next-month", Cmd::NextMonth),
    ("prev-month", Cmd::PrevMonth),
    ("next-year", Cmd::NextYear),
    ("prev-year", Cmd::PrevYear),
    ("commit", Cmd::Commit),
    ("dismiss", Cmd::Dismiss),
    ("exit", Cmd::Exit),
];

impl Cmd {
    pub fn name(&self) -> &'static str {
        CMD_NAMES
            .iter()
            .find(|(_, cmd)| cmd == self)
            .map_or("noop", |(name, _)| *name)
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cmd {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");

        CMD_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, cmd)| *cmd)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::Config,
                    &format!("unknown command '{}'", s),
                )
            })
    }
}
