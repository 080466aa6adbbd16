use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::zone::Zone;

const CONFIG_PATH_ENV_VAR: &str = "TIMEX_CONFIG_FILE";

pub const DEFAULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("timex").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".timex.toml"));
    }

    locations
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Zone used for date-times given without one
    pub timezone: Zone,
    /// `strftime` style output format
    pub format: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            timezone: Zone::Local,
            format: DEFAULT_FORMAT.to_owned(),
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;

        if StrftimeItems::new(&config.format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                &format!("'{}' is not a valid output format", config.format),
            ));
        }

        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    log::debug!("Loading configuration from '{}'", path.display());

    let content = fs::read_to_string(path)?;
    content.parse::<Config>().map_err(|err| {
        let msg = format!(
            "{}: {}",
            path.display(),
            err.message.as_deref().unwrap_or_default()
        );
        err.with_msg(&msg)
    })
}

/// Loads the configuration from `path` if given. Otherwise the first existing
/// file of [`find_configfile_locations`] is used, falling back to the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(Error::new(
                ErrorKind::IOError(io::Error::from(io::ErrorKind::NotFound)),
                &format!("Configuration file '{}' does not exist", path.display()),
            ));
        }
        return load_config(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(path) => load_config(&path),
        None => {
            log::info!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}
