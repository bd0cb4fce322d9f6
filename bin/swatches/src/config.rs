//! Palette configuration overrides read from disk.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use chromatone::palette::ConfigTable;
use tracing::{info, warn};

/// Environment variable pointing at a JSON file of per-standard overrides.
const CONFIG_PATH_ENV: &str = "CHROMATONE_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "chromatone.json";

/// Load the configuration table, falling back to the built-in defaults when
/// the file is missing or invalid.
pub fn load() -> ConfigTable {
    let path = resolve_config_path();
    match fs::read_to_string(&path) {
        Ok(contents) => match ConfigTable::from_json(&contents) {
            Ok(table) => {
                info!(
                    path = %path.display(),
                    count = table.iter().count(),
                    "loaded palette configuration"
                );
                table
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to parse config; falling back to defaults"
                );
                ConfigTable::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                path = %path.display(),
                "config file not found; using built-in defaults"
            );
            ConfigTable::default()
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "failed to read config; falling back to defaults"
            );
            ConfigTable::default()
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
