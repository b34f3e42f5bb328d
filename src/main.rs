/*!
# Worklog - A Terminal Work-Log Tracker

Worklog records what was worked on, by whom, when and for how long, and lets
you find those records again by date, date range, name, time spent or a term
in the title or notes.

## Usage

```
worklog [OPTIONS]

Options:
      --db <PATH>             Path to the work-log database (overrides WORKLOG_DB)
  -v, --verbose               Print verbose log output to stderr
      --log-format <FORMAT>   Format of log output on stderr [default: text] [possible values: text, json]
  -h, --help                  Print help
  -V, --version               Print version
```

## Configuration

- `WORKLOG_DB`: The database file to use (defaults to `~/.worklog/work_log.db`)
- `RUST_LOG`: Log filter directives (defaults to `warn`)
*/

use clap::Parser;
use tracing::{debug, info, info_span};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;
use worklog::cli::CliArgs;
use worklog::config::{self, Config};
use worklog::console::Terminal;
use worklog::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use worklog::db::{Database, DatabaseLock};
use worklog::errors::AppResult;
use worklog::menu::MenuController;

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the menus on stdout.
fn init_tracing(args: &CliArgs) {
    let filter = if args.verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if args.json_logs() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// The main entry point for the worklog application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments and initializes logging
/// 2. Loads and validates configuration
/// 3. Takes the single-writer lock on the database
/// 4. Opens the database and ensures the schema exists
/// 5. Runs the interactive menu until the operator quits
///
/// # Errors
///
/// Returns an error for invalid configuration, a database that is locked or
/// unreadable, or standard input closing before the operator quits.
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting worklog");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load(args.db.as_deref())?;
    config.validate()?;
    config::ensure_db_directory_exists(&config.db_path)?;

    let _lock = DatabaseLock::acquire(&config.db_path)?;
    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;
    info!("Database ready");

    let mut menu = MenuController::new(Terminal::stdio(), db);
    menu.run()?;

    info!("Exiting worklog");
    Ok(())
}
