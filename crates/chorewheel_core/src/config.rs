//! Runtime configuration.
//!
//! # Responsibility
//! - Resolve where the store document and logs live.
//! - Apply optional environment overrides on top of defaults.
//!
//! # Invariants
//! - Resolved directories are absolute (relative values join the working
//!   directory).
//! - Blank override values are ignored.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_DIR_NAME: &str = "user files";
pub const DEFAULT_DATA_FILE_NAME: &str = "chore_data.json";
pub const DEFAULT_STOP_WORD: &str = "done";
const LOG_DIR_NAME: &str = "logs";

pub const ENV_DATA_DIR: &str = "CHOREWHEEL_DATA_DIR";
pub const ENV_DATA_FILE: &str = "CHOREWHEEL_DATA_FILE";
pub const ENV_LOG_LEVEL: &str = "CHOREWHEEL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CHOREWHEEL_LOG_DIR";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the store document.
    pub storage_dir: PathBuf,
    /// Store document file name inside `storage_dir`.
    pub file_name: String,
    /// Word that ends an item-entry prompt (compared case-insensitively).
    pub stop_word: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Defaults rooted at `working_dir`.
    pub fn with_working_dir(working_dir: &Path) -> Self {
        let storage_dir = working_dir.join(DEFAULT_STORAGE_DIR_NAME);
        Self {
            log_dir: storage_dir.join(LOG_DIR_NAME),
            storage_dir,
            file_name: DEFAULT_DATA_FILE_NAME.to_string(),
            stop_word: DEFAULT_STOP_WORD.to_string(),
            log_level: default_log_level().to_string(),
        }
    }

    /// Defaults rooted at `working_dir`, overridden by `lookup` values.
    ///
    /// `lookup` receives one of the `ENV_*` keys.
    pub fn from_lookup(working_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::with_working_dir(working_dir);
        if let Some(dir) = read(ENV_DATA_DIR) {
            config.storage_dir = working_dir.join(dir);
            config.log_dir = config.storage_dir.join(LOG_DIR_NAME);
        }
        if let Some(file_name) = read(ENV_DATA_FILE) {
            config.file_name = file_name;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = working_dir.join(dir);
        }
        config
    }

    /// Defaults rooted at `working_dir`, overridden by process environment.
    pub fn from_env(working_dir: &Path) -> Self {
        Self::from_lookup(working_dir, |key| std::env::var(key).ok())
    }

    /// Full path of the store document.
    pub fn data_path(&self) -> PathBuf {
        self.storage_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ENV_DATA_DIR, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::Path;

    #[test]
    fn defaults_use_user_files_directory() {
        let config = AppConfig::with_working_dir(Path::new("/home/family"));
        assert_eq!(
            config.data_path(),
            Path::new("/home/family/user files/chore_data.json")
        );
        assert_eq!(config.log_dir, Path::new("/home/family/user files/logs"));
        assert_eq!(config.stop_word, "done");
    }

    #[test]
    fn overrides_apply_and_blank_values_are_ignored() {
        let vars: HashMap<&str, &str> = [
            (ENV_DATA_DIR, "household"),
            (ENV_LOG_LEVEL, "  "),
            (ENV_LOG_DIR, "/var/log/chorewheel"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(Path::new("/srv"), |key| {
            vars.get(key).map(|value| value.to_string())
        });
        assert_eq!(config.storage_dir, Path::new("/srv/household"));
        assert_eq!(config.log_dir, Path::new("/var/log/chorewheel"));
        assert_eq!(config.log_level, crate::logging::default_log_level());
    }
}
