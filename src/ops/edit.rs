//! Change a single field of an existing entry.

use crate::console::Console;
use crate::errors::AppResult;
use crate::repository::{Entry, EntryRepository};
use crate::validate::{ask_date, ask_time};
use tracing::info;

const FIELD_MENU: &str = "\n\tSelect field to edit:\n\n\
    \t1 - title,\n\
    \t2 - time,\n\
    \t3 - date,\n\
    \t4 - notes.\n\n>> ";

/// The fields that can be edited. Name and id are fixed once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Time,
    Date,
    Notes,
}

impl EditField {
    /// Maps a field selector (`"1"` to `"4"`) to its field.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog::ops::EditField;
    ///
    /// assert_eq!(EditField::from_selector("2"), Some(EditField::Time));
    /// assert_eq!(EditField::from_selector("5"), None);
    /// ```
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(EditField::Title),
            "2" => Some(EditField::Time),
            "3" => Some(EditField::Date),
            "4" => Some(EditField::Notes),
            _ => None,
        }
    }
}

/// Asks which field to change, asks for its new value and stores the entry.
///
/// Exactly one field is written; every other field keeps its value. Title and
/// notes take any text, empty included. Time and date are validated.
///
/// # Errors
///
/// Returns an error if the console closes or the repository write fails.
pub fn edit_entry(
    console: &mut dyn Console,
    repo: &mut dyn EntryRepository,
    entry: &Entry,
) -> AppResult<Entry> {
    let field = loop {
        console.clear_screen()?;
        let selector = console.read_line(FIELD_MENU)?;
        match EditField::from_selector(&selector) {
            Some(field) => break field,
            None => console.pause("Wrong selection. Press enter to try again")?,
        }
    };

    let mut updated = entry.clone();
    match field {
        EditField::Title => updated.title = console.read_line("\nEnter your update >> ")?,
        EditField::Time => updated.time = ask_time(console)?,
        EditField::Date => updated.date = ask_date(console)?,
        EditField::Notes => updated.notes = console.read_line("\nEnter your update >> ")?,
    }

    repo.update(&updated)?;
    info!(entry_id = updated.id, field = ?field, "Entry edited");

    console.pause("\nEntry edited. Press enter for search menu")?;
    Ok(updated)
}
