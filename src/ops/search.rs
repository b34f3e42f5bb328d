//! The five ways of looking entries up.
//!
//! Every mode gathers its criteria from the operator, turns them into an
//! [`EntryFilter`] and lets the repository do the matching, so results always
//! come back newest date first.

use crate::console::Console;
use crate::errors::AppResult;
use crate::ops::browse::browse;
use crate::repository::{Entry, EntryFilter, EntryRepository};
use crate::validate::{ask_date, ask_time, parse_date};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, info};

/// A search offered by the search menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Entries dated within an inclusive range.
    DateRange,
    /// Entries with an exact number of minutes.
    Time,
    /// Entries by one person, chosen by exact full name.
    Name,
    /// Entries whose title or notes contain a term.
    Term,
    /// Entries on one exact date.
    Date,
}

impl SearchMode {
    /// Every mode, in menu order.
    pub const ALL: [SearchMode; 5] = [
        SearchMode::DateRange,
        SearchMode::Time,
        SearchMode::Name,
        SearchMode::Term,
        SearchMode::Date,
    ];

    /// Maps a search-menu selection (`"1"` to `"5"`) to its mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog::ops::SearchMode;
    ///
    /// assert_eq!(SearchMode::from_selection("2"), Some(SearchMode::Time));
    /// assert_eq!(SearchMode::from_selection("6"), None);
    /// ```
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(SearchMode::DateRange),
            "2" => Some(SearchMode::Time),
            "3" => Some(SearchMode::Name),
            "4" => Some(SearchMode::Term),
            "5" => Some(SearchMode::Date),
            _ => None,
        }
    }

    /// Menu number of this mode.
    pub fn selection(self) -> usize {
        match self {
            SearchMode::DateRange => 1,
            SearchMode::Time => 2,
            SearchMode::Name => 3,
            SearchMode::Term => 4,
            SearchMode::Date => 5,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchMode::DateRange => "Search by range of dates",
            SearchMode::Time => "Search by time spent",
            SearchMode::Name => "Search by employee name",
            SearchMode::Term => "Search by term",
            SearchMode::Date => "Search by date",
        };
        f.write_str(label)
    }
}

/// Runs the search for `mode` and returns the matching entries.
pub fn search(
    mode: SearchMode,
    console: &mut dyn Console,
    repo: &dyn EntryRepository,
) -> AppResult<Vec<Entry>> {
    console.clear_screen()?;
    let results = match mode {
        SearchMode::DateRange => date_range_search(console, repo)?,
        SearchMode::Time => time_search(console, repo)?,
        SearchMode::Name => name_search(console, repo)?,
        SearchMode::Term => term_search(console, repo)?,
        SearchMode::Date => date_search(console, repo)?,
    };
    info!(mode = ?mode, results = results.len(), "Search finished");
    Ok(results)
}

/// Hands a result set to the browser, or reports that there is nothing to show.
///
/// Either way the caller goes back to the search menu afterwards.
pub fn run_results(
    console: &mut dyn Console,
    repo: &mut dyn EntryRepository,
    results: Vec<Entry>,
) -> AppResult<()> {
    if results.is_empty() {
        console.pause("\nNo results found. Press enter for search menu.")?;
        return Ok(());
    }
    let exit = browse(console, repo, results)?;
    debug!("Browser exited with {:?}", exit);
    Ok(())
}

/// Lists the dates on record, then matches one exact date.
pub fn date_search(console: &mut dyn Console, repo: &dyn EntryRepository) -> AppResult<Vec<Entry>> {
    let entries = repo.all()?;
    console.write_line("\nThere is a list of available dates:\n")?;
    for date in distinct(entries.iter().map(|e| e.date)) {
        console.write_line(&date.to_string())?;
    }

    let date = ask_date(console)?;
    repo.filter(&EntryFilter::DateEquals(date))
}

/// Matches an inclusive date range.
///
/// A malformed bound, or a first date later than the second, is reported and
/// both bounds are asked for again.
pub fn date_range_search(
    console: &mut dyn Console,
    repo: &dyn EntryRepository,
) -> AppResult<Vec<Entry>> {
    let (start, end) = ask_date_range(console)?;
    repo.filter(&EntryFilter::DateBetween { start, end })
}

fn ask_date_range(console: &mut dyn Console) -> AppResult<(NaiveDate, NaiveDate)> {
    loop {
        console.write_line("\nEnter range of dates below in format YYYY-MM-DD\n")?;

        let start = match parse_date(&console.read_line("1st >> ")?) {
            Ok(date) => date,
            Err(_) => {
                console.write_line("Wrong format. Try again.")?;
                continue;
            }
        };
        let end = match parse_date(&console.read_line("2nd >> ")?) {
            Ok(date) => date,
            Err(_) => {
                console.write_line("Wrong format. Try again.")?;
                continue;
            }
        };

        if start > end {
            debug!("Rejected reversed range {} > {}", start, end);
            console.write_line("The first date must not be after the second one.")?;
            continue;
        }
        return Ok((start, end));
    }
}

/// Narrows the names on record by a fragment, then matches one full name
/// among the narrowed set.
pub fn name_search(console: &mut dyn Console, repo: &dyn EntryRepository) -> AppResult<Vec<Entry>> {
    let entries = repo.all()?;
    console.write_line("\nThere is a list of employee names:\n")?;
    for name in distinct(entries.into_iter().map(|e| e.name)) {
        console.write_line(&name)?;
    }

    let fragment = console.read_line("\nChoose an employee name >> ")?;
    let narrowing = EntryFilter::NameContains(fragment);
    let candidates = repo.filter(&narrowing)?;

    console.write_line("\nThere is a list of possible matches:\n")?;
    for name in distinct(candidates.into_iter().map(|e| e.name)) {
        console.write_line(&name)?;
    }

    let name = console.read_line("\nEnter exact full name >> ")?;
    repo.filter(&EntryFilter::All(vec![
        narrowing,
        EntryFilter::NameEquals(name),
    ]))
}

/// Matches a term against title or notes.
pub fn term_search(console: &mut dyn Console, repo: &dyn EntryRepository) -> AppResult<Vec<Entry>> {
    let term = console.read_line("\nEnter a term to be searched >> ")?;
    repo.filter(&EntryFilter::TitleOrNotesContains(term))
}

/// Matches an exact number of minutes.
pub fn time_search(console: &mut dyn Console, repo: &dyn EntryRepository) -> AppResult<Vec<Entry>> {
    let time = ask_time(console)?;
    repo.filter(&EntryFilter::TimeEquals(time))
}

/// Drops repeats, keeping the first occurrence of each value in order.
fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
