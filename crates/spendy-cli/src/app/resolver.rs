//! Path and backend resolution for config and expense data.

use std::path::{Path, PathBuf};

use spendy_core::storage::{FileStorage, SqliteStorage};
use spendy_core::StorageAdapter;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, read_config, SpendyConfig, StorageBackend};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SPENDY_CONFIG";

/// File name of the SQLite database inside the data directory.
pub const SQLITE_FILE: &str = "spendy.db";

/// Resolve the config file path, checking SPENDY_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if one exists. Running without one is allowed.
pub fn load_config() -> anyhow::Result<Option<SpendyConfig>> {
    let path = resolve_config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    read_config(&path).map(Some)
}

/// Resolve the data directory: `--data-dir` flag, then config, then the
/// XDG default.
pub fn resolve_data_dir(cli: &Cli, config: Option<&SpendyConfig>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref() {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.storage.data_dir));
    }
    default_data_dir()
}

/// Open the storage adapter for a backend rooted at `data_dir`.
pub fn open_storage(
    backend: StorageBackend,
    data_dir: &Path,
) -> anyhow::Result<Box<dyn StorageAdapter>> {
    match backend {
        StorageBackend::File => Ok(Box::new(FileStorage::new(data_dir))),
        StorageBackend::Sqlite => {
            let storage = SqliteStorage::open(&data_dir.join(SQLITE_FILE))?;
            Ok(Box::new(storage))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn test_data_dir_flag_wins_over_config() {
        let cli = Cli::parse_from(["spendy", "--data-dir", "/tmp/from-flag", "categories"]);
        let config = SpendyConfig::new(StorageBackend::File, "/tmp/from-config".into(), None, None);
        let dir = resolve_data_dir(&cli, Some(&config)).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/from-flag"));
    }

    #[test]
    fn test_open_storage_backends() {
        let dir = tempdir().unwrap();

        let file = open_storage(StorageBackend::File, dir.path()).unwrap();
        assert!(file.describe().ends_with("spendy-expenses.json"));

        let sqlite = open_storage(StorageBackend::Sqlite, dir.path()).unwrap();
        assert!(sqlite.describe().starts_with("sqlite:"));
        assert!(dir.path().join(SQLITE_FILE).exists());
    }
}
