use std::{
    fs,
    path::{Path, PathBuf},
};

use event_sender::mock::WorldState;
use tracing::debug;

use crate::{
    config::Config,
    error::{CliError, Result},
};

pub const DEFAULT_LEDGER_PATH: &str = ".event-sender/ledger.json";

/// Flag or environment first, then the config file, then the default.
pub fn resolve_path(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.ledger.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_PATH))
}

pub fn load(path: &Path) -> Result<WorldState> {
    if !path.exists() {
        return Err(CliError::LedgerMissing(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let world = serde_json::from_slice(&bytes)?;
    debug!(path = %path.display(), "ledger loaded");
    Ok(world)
}

/// Writes to a sibling temp file and renames it over `path`.
pub fn save(path: &Path, world: &WorldState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, serde_json::to_vec_pretty(world)?)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    debug!(path = %path.display(), tx_count = world.tx_count(), "ledger saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;

    #[test]
    fn flag_beats_config() {
        let config = Config {
            ledger: LedgerConfig {
                path: Some(PathBuf::from("from-config.json")),
            },
            ..Config::default()
        };

        assert_eq!(
            resolve_path(Some(Path::new("flag.json")), &config),
            PathBuf::from("flag.json")
        );
        assert_eq!(resolve_path(None, &config), PathBuf::from("from-config.json"));
        assert_eq!(
            resolve_path(None, &Config::default()),
            PathBuf::from(DEFAULT_LEDGER_PATH)
        );
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let ledger = tmp.path().join("ledger.json");
        std::fs::create_dir(&ledger).expect("create dir");
        std::fs::write(ledger.join("occupied"), b"x").expect("write file");

        assert!(save(&ledger, &WorldState::default()).is_err());
        assert!(!tmp.path().join("ledger.json.tmp").exists());
    }
}
