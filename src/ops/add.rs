//! Record a new work-log entry.

use crate::console::Console;
use crate::errors::AppResult;
use crate::repository::{Entry, EntryRepository, NewEntry};
use crate::validate::{ask_date, ask_time};
use tracing::info;

/// Asks for every field of a new entry and stores it.
///
/// Name, title and notes are taken as typed, empty included. Date and time
/// go through the validating prompts, so nothing is stored until both parse.
///
/// # Errors
///
/// Returns an error if the console closes or the repository write fails.
pub fn add_entry(
    console: &mut dyn Console,
    repo: &mut dyn EntryRepository,
) -> AppResult<Entry> {
    console.clear_screen()?;
    console.write_line("\n\n\t\tADD ENTRY\n")?;

    let name = console.read_line("Enter a name for the entry >> ")?;
    let title = console.read_line("Enter a title for the entry >> ")?;
    let date = ask_date(console)?;
    let time = ask_time(console)?;
    let notes = console.read_line("\nEnter any notes (optional) >> ")?;

    let entry = repo.create(NewEntry {
        name,
        title,
        date,
        time,
        notes,
    })?;
    info!(entry_id = entry.id, "Entry created");

    console.pause("\n\nThe task was added. Press enter to main menu")?;
    Ok(entry)
}
