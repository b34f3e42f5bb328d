/*!
# Worklog

Worklog is a terminal tool for recording time spent on tasks. Each entry holds
the worker's name, a task title, the date, the minutes spent and free-form
notes. Entries are kept in a local SQLite database and can be searched, paged,
edited and deleted from a menu-driven interface.

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Resolution of the database path
- `console`: Line-oriented terminal input and output
- `db`: SQLite storage, schema and the single-writer lock
- `errors`: Error handling infrastructure
- `menu`: The main/search menu state machine
- `ops`: Adding, searching, browsing and editing entries
- `repository`: The entry model and the storage contract
- `validate`: Re-prompting date and time readers

## Usage Example

```rust,no_run
use worklog::console::Terminal;
use worklog::{Config, Database, MenuController};

fn main() -> worklog::AppResult<()> {
    let config = Config::load(None)?;
    config.validate()?;

    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    MenuController::new(Terminal::stdio(), db).run()
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Terminal input and output
pub mod console;
/// Application-wide constants
pub mod constants;
/// SQLite persistence
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Menu state machine
pub mod menu;
/// Interactive operations on entries
pub mod ops;
/// Entry model and storage contract
pub mod repository;
/// Date and time input validation
pub mod validate;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use db::Database;
pub use errors::{AppError, AppResult};
pub use menu::{MenuController, MenuState};
pub use repository::{Entry, EntryFilter, EntryRepository, NewEntry};
