//! Configuration management for the worklog application.
//!
//! This module works out where the database lives. The only setting is the
//! database path, taken from (in order of precedence):
//!
//! - the `--db` command-line option
//! - the `WORKLOG_DB` environment variable
//! - `$HOME/.worklog/work_log.db`
//!
//! `~` and environment variable references are expanded, and relative paths
//! are resolved against the current directory.

use crate::constants::{
    DEFAULT_DB_SUBPATH, ENV_VAR_HOME, ENV_VAR_WORKLOG_DB, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the worklog application.
///
/// # Examples
///
/// ```
/// use worklog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/var/lib/worklog/work_log.db"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file holding the entries.
    pub db_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Config {
    /// Loads configuration, preferring `cli_db` over the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - No path is given and `HOME` is not set
    /// - The path expansion fails
    /// - The resulting path is empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use worklog::Config;
    ///
    /// let config = Config::load(Some("~/work_log.db")).expect("Failed to load configuration");
    /// assert!(config.db_path.is_absolute());
    /// ```
    pub fn load(cli_db: Option<&str>) -> AppResult<Self> {
        let raw = match cli_db {
            Some(path) => path.to_string(),
            None => match env::var(ENV_VAR_WORKLOG_DB) {
                Ok(path) => path,
                Err(_) => default_db_path()?,
            },
        };

        let expanded = shellexpand::full(&raw)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        if expanded.trim().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        let mut db_path = PathBuf::from(expanded.into_owned());
        if db_path.is_relative() {
            db_path = env::current_dir()?.join(db_path);
        }
        debug!("Resolved database path");

        Ok(Config { db_path })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the database path is empty, relative, or
    /// names a directory.
    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        if !self.db_path.is_absolute() {
            return Err(AppError::Config(
                "Database path must be an absolute path".to_string(),
            ));
        }

        if self.db_path.is_dir() {
            return Err(AppError::Config(
                "Database path points to a directory".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_db_path() -> AppResult<String> {
    let home = env::var(ENV_VAR_HOME).map_err(|_| {
        AppError::Config(format!(
            "{} is not set; pass --db or set {}",
            ENV_VAR_HOME, ENV_VAR_WORKLOG_DB
        ))
    })?;
    Ok(format!("{}/{}", home, DEFAULT_DB_SUBPATH))
}

/// Creates the directory that will hold the database file, if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_db_directory_exists(db_path: &Path) -> AppResult<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating database directory");
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
