//! Constants used throughout the application.
//!
//! This module contains all constants used in the worklog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "worklog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A terminal work-log tracker";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level. Kept quiet so log lines do not interleave with the menus.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the database file.
pub const ENV_VAR_WORKLOG_DB: &str = "WORKLOG_DB";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default location of the database relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".worklog/work_log.db";
/// Suffix appended to the database path to form the lock file path.
pub const LOCK_FILE_SUFFIX: &str = ".lock";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Database
/// Maximum connections held by the pool. The store is single-writer.
pub const DB_POOL_SIZE: u32 = 1;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Terminal
/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "worklog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
