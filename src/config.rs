use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::WeekStart;
use crate::cmds::Cmd;
use crate::error::Result;

/// Maps input lines of the interactive picker to commands.
pub type KeyMap = HashMap<String, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "DATEPICK_CONFIG_FILE";

pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("datepick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".datepick.toml"));
    }

    locations
}

/// Loads `path` if given, otherwise the first existing file of
/// [`find_configfile_locations`] and falls back to the defaults if there is
/// none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(path) => Config::from_file(&path),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn default_keys() -> KeyMap {
    let mut keys = KeyMap::new();

    keys.insert("o".to_owned(), Cmd::Open);
    keys.insert("n".to_owned(), Cmd::NextMonth);
    keys.insert("p".to_owned(), Cmd::PrevMonth);
    keys.insert("N".to_owned(), Cmd::NextYear);
    keys.insert("P".to_owned(), Cmd::PrevYear);
    keys.insert("q".to_owned(), Cmd::Exit);

    keys
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub week_start: WeekStart,
    pub today_symbol: Option<char>,
    pub focus_symbol: Option<char>,
    pub outside_symbol: Option<char>,
    pub keys: KeyMap,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            week_start: WeekStart::default(),
            today_symbol: Some('*'),
            focus_symbol: Some('>'),
            outside_symbol: Some('.'),
            keys: default_keys(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        log::info!("Loading config from '{}'", path.display());
        let content = fs::read_to_string(path)?;
        Config::from_toml(&content).map_err(|err| {
            let msg = format!(
                "{} (in '{}')",
                err.message.as_deref().unwrap_or_default(),
                path.display()
            );
            err.with_msg(&msg)
        })
    }

    pub fn cmd_for(&self, input: &str) -> Option<Cmd> {
        self.keys.get(input).copied()
    }
}
