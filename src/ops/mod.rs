//! Interactive operations reached from the menus.
//!
//! Each operation drives the operator through one flow on a [`Console`] and
//! talks to storage only through an [`EntryRepository`].
//!
//! [`Console`]: crate::console::Console
//! [`EntryRepository`]: crate::repository::EntryRepository

pub mod add;
pub mod browse;
pub mod edit;
pub mod search;

// Re-export commonly used functions
pub use add::add_entry;
pub use browse::{browse, BrowseCommand, BrowseExit, ResultBrowser};
pub use edit::{edit_entry, EditField};
pub use search::{run_results, search, SearchMode};
