use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "event-sender.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ledger: LedgerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
}

/// Loads `explicit` if given, otherwise `./event-sender.toml` when it
/// exists, otherwise the defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => parse_file(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                parse_file(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn parse_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
