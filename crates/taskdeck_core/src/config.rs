//! Runtime configuration and persisted storage keys.
//!
//! # Responsibility
//! - Name the storage keys shared by repository and controller.
//! - Resolve data/log locations from explicit values, environment and
//!   defaults, in that order.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

/// Storage key for the JSON task array.
pub const ITEMS_KEY: &str = "todo.items.v1";
/// Storage key for the JSON filter mode string.
pub const FILTER_KEY: &str = "todo.filter.v1";

pub const DEFAULT_DB_FILE_NAME: &str = "taskdeck.sqlite3";
pub const DATA_DIR_ENV: &str = "TASKDECK_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "TASKDECK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TASKDECK_LOG_DIR";

const APP_DIR_NAME: &str = "taskdeck";
const LOG_SUBDIR_NAME: &str = "logs";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the database file.
    pub data_dir: PathBuf,
    pub db_file_name: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

/// Partially specified settings, typically from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Builds a config rooted at `data_dir` with default file names and
    /// log level.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let log_dir = data_dir.join(LOG_SUBDIR_NAME);
        Self {
            data_dir,
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_level: default_log_level().to_string(),
            log_dir,
        }
    }

    /// Resolves overrides, then `TASKDECK_*` environment values, then
    /// `<fallback_root>/taskdeck`.
    ///
    /// `env` is injected so resolution stays testable without touching the
    /// process environment.
    pub fn resolve(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
        fallback_root: &Path,
    ) -> Self {
        let non_empty = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let data_dir = overrides
            .data_dir
            .or_else(|| non_empty(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| fallback_root.join(APP_DIR_NAME));

        let mut config = Self::with_data_dir(data_dir);
        if let Some(level) = overrides.log_level.or_else(|| non_empty(LOG_LEVEL_ENV)) {
            config.log_level = level;
        }
        if let Some(log_dir) = overrides
            .log_dir
            .or_else(|| non_empty(LOG_DIR_ENV).map(PathBuf::from))
        {
            config.log_dir = log_dir;
        }
        config
    }

    /// Full path of the task store database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigOverrides, DATA_DIR_ENV, LOG_LEVEL_ENV};
    use std::path::{Path, PathBuf};

    #[test]
    fn resolve_falls_back_to_app_dir_under_root() {
        let config = AppConfig::resolve(ConfigOverrides::default(), |_| None, Path::new("/data"));
        assert_eq!(config.data_dir, PathBuf::from("/data/taskdeck"));
        assert_eq!(
            config.db_path(),
            PathBuf::from("/data/taskdeck/taskdeck.sqlite3")
        );
        assert_eq!(config.log_dir, PathBuf::from("/data/taskdeck/logs"));
    }

    #[test]
    fn resolve_prefers_overrides_over_environment() {
        let env = |name: &str| match name {
            DATA_DIR_ENV => Some("/env/data".to_string()),
            LOG_LEVEL_ENV => Some("warn".to_string()),
            _ => None,
        };

        let from_env = AppConfig::resolve(ConfigOverrides::default(), env, Path::new("/root"));
        assert_eq!(from_env.data_dir, PathBuf::from("/env/data"));
        assert_eq!(from_env.log_level, "warn");

        let overrides = ConfigOverrides {
            data_dir: Some(PathBuf::from("/flag/data")),
            log_level: Some("error".to_string()),
            log_dir: Some(PathBuf::from("/flag/logs")),
        };
        let from_flags = AppConfig::resolve(overrides, env, Path::new("/root"));
        assert_eq!(from_flags.data_dir, PathBuf::from("/flag/data"));
        assert_eq!(from_flags.log_level, "error");
        assert_eq!(from_flags.log_dir, PathBuf::from("/flag/logs"));
    }

    #[test]
    fn resolve_ignores_blank_environment_values() {
        let config = AppConfig::resolve(
            ConfigOverrides::default(),
            |_| Some("  ".to_string()),
            Path::new("/data"),
        );
        assert_eq!(config.data_dir, PathBuf::from("/data/taskdeck"));
    }
}
