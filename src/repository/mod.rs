//! Work-log entries and the storage contract the application relies on.
//!
//! The interactive flows never talk to a storage engine directly. They are
//! handed something that implements [`EntryRepository`] and express every
//! search as an [`EntryFilter`]. Two implementations ship with the crate:
//! the SQLite-backed [`crate::db::Database`] and [`memory::MemoryEntryRepository`].
//!
//! # Invariants
//! - `all` and `filter` return entries ordered by `date` descending, ties by
//!   `id` descending.
//! - An entry's `id` is assigned on `create` and never changes or gets reused.

pub mod memory;

use crate::errors::AppResult;
use chrono::NaiveDate;

pub use memory::MemoryEntryRepository;

/// One recorded piece of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Store-assigned identity.
    pub id: i64,
    /// Who did the work. May be empty.
    pub name: String,
    /// Short description of the work item. May be empty.
    pub title: String,
    /// Day the work happened.
    pub date: NaiveDate,
    /// Minutes spent.
    pub time: i64,
    /// Free-form notes. May be empty.
    pub notes: String,
}

/// The fields of an [`Entry`] before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: i64,
    pub notes: String,
}

impl NewEntry {
    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> Entry {
        Entry {
            id,
            name: self.name,
            title: self.title,
            date: self.date,
            time: self.time,
            notes: self.notes,
        }
    }
}

/// A condition over entry fields used to select a subset of entries.
///
/// Text containment is case-sensitive. Date ranges include both bounds.
///
/// # Examples
///
/// ```
/// use worklog::repository::{Entry, EntryFilter};
/// use chrono::NaiveDate;
///
/// let entry = Entry {
///     id: 1,
///     name: "Redha Achour".to_string(),
///     title: "Project 4".to_string(),
///     date: NaiveDate::from_ymd_opt(2017, 12, 17).unwrap(),
///     time: 45,
///     notes: "work log using database".to_string(),
/// };
///
/// assert!(EntryFilter::TimeEquals(45).matches(&entry));
/// assert!(EntryFilter::TitleOrNotesContains("database".to_string()).matches(&entry));
/// assert!(!EntryFilter::TitleOrNotesContains("Database".to_string()).matches(&entry));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    /// `date` equals the given day.
    DateEquals(NaiveDate),
    /// `start <= date <= end`.
    DateBetween { start: NaiveDate, end: NaiveDate },
    /// `name` contains the given text.
    NameContains(String),
    /// `name` equals the given text exactly.
    NameEquals(String),
    /// `title` or `notes` contains the given text.
    TitleOrNotesContains(String),
    /// `time` equals the given number of minutes.
    TimeEquals(i64),
    /// Every inner filter matches. An empty list matches everything.
    All(Vec<EntryFilter>),
}

impl EntryFilter {
    /// Evaluates the filter against one entry.
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            EntryFilter::DateEquals(date) => entry.date == *date,
            EntryFilter::DateBetween { start, end } => {
                *start <= entry.date && entry.date <= *end
            }
            EntryFilter::NameContains(text) => entry.name.contains(text.as_str()),
            EntryFilter::NameEquals(name) => entry.name == *name,
            EntryFilter::TitleOrNotesContains(term) => {
                entry.title.contains(term.as_str()) || entry.notes.contains(term.as_str())
            }
            EntryFilter::TimeEquals(time) => entry.time == *time,
            EntryFilter::All(filters) => filters.iter().all(|f| f.matches(entry)),
        }
    }
}

/// Storage operations the interactive flows need.
///
/// Every method commits before it returns.
pub trait EntryRepository {
    /// Persists a new entry and returns it with its assigned id.
    fn create(&mut self, entry: NewEntry) -> AppResult<Entry>;
    /// Returns every entry, newest date first.
    fn all(&self) -> AppResult<Vec<Entry>>;
    /// Returns the entries matching `filter`, in the same order as [`EntryRepository::all`].
    fn filter(&self, filter: &EntryFilter) -> AppResult<Vec<Entry>>;
    /// Overwrites the stored fields of the entry with `entry.id`.
    fn update(&mut self, entry: &Entry) -> AppResult<()>;
    /// Permanently removes the entry with `entry.id`.
    fn delete(&mut self, entry: &Entry) -> AppResult<()>;
}
