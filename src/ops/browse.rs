//! Paging through search results one entry at a time.
//!
//! # Invariants
//! - The cursor is 1-based and always within `1..=len`.
//! - The result set is never empty and never changes while browsing.
//! - Editing, deleting or backing out ends the browse; paging never does.

use crate::console::Console;
use crate::errors::AppResult;
use crate::ops::edit::edit_entry;
use crate::repository::{Entry, EntryRepository};
use tracing::{debug, info};

/// A single-letter browser command. Letters are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Edit,
    Delete,
    Back,
}

impl BrowseCommand {
    /// Parses `n`, `p`, `e`, `d` or `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog::ops::BrowseCommand;
    ///
    /// assert_eq!(BrowseCommand::parse("N"), Some(BrowseCommand::Next));
    /// assert_eq!(BrowseCommand::parse("x"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "n" => Some(BrowseCommand::Next),
            "p" => Some(BrowseCommand::Previous),
            "e" => Some(BrowseCommand::Edit),
            "d" => Some(BrowseCommand::Delete),
            "b" => Some(BrowseCommand::Back),
            _ => None,
        }
    }
}

/// How a browse session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseExit {
    /// The operator went back without changing anything.
    Back,
    /// The shown entry was edited; holds the stored version.
    Edited(Entry),
    /// The shown entry was deleted.
    Deleted(Entry),
}

/// Cursor over a fixed, non-empty list of results.
#[derive(Debug, Clone)]
pub struct ResultBrowser {
    results: Vec<Entry>,
    cursor: usize,
}

impl ResultBrowser {
    /// Starts at the first result. Returns `None` for an empty list.
    pub fn new(results: Vec<Entry>) -> Option<Self> {
        if results.is_empty() {
            None
        } else {
            Some(ResultBrowser { results, cursor: 1 })
        }
    }

    /// 1-based position of the shown result.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.results.len()
    }

    /// The result under the cursor.
    pub fn current(&self) -> &Entry {
        &self.results[self.cursor - 1]
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.results.len()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 1
    }

    /// Moves forward one result. Returns `false` and stays put on the last one.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one result. Returns `false` and stays put on the first one.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// The screen for the current result.
    pub fn render(&self) -> String {
        let entry = self.current();
        format!(
            "\n\n\t\tYOUR RESULTS\n\n\
             \tResult {} of {}:\n\n\
             \tEntry title: {}\n\
             \tEntry name: {}\n\
             \tTime spent: {}\n\
             \tDate: {}\n\
             \tNotes: {}",
            self.cursor,
            self.results.len(),
            entry.title,
            entry.name,
            entry.time,
            entry.date,
            entry.notes
        )
    }

    /// Options line, advertising paging only where it is possible.
    pub fn options(&self) -> String {
        let mut options = String::from("\nOptions: ");
        if self.has_next() {
            options.push_str("[N]ext, ");
        }
        if self.has_previous() {
            options.push_str("[P]revious, ");
        }
        options.push_str("[B]ack, [E]dit, [D]elete\n");
        options
    }
}

/// Shows `results` one at a time until the operator edits, deletes or goes back.
///
/// An empty `results` returns [`BrowseExit::Back`] straight away.
///
/// # Errors
///
/// Returns an error if the console closes or a repository write fails.
pub fn browse(
    console: &mut dyn Console,
    repo: &mut dyn EntryRepository,
    results: Vec<Entry>,
) -> AppResult<BrowseExit> {
    let Some(mut browser) = ResultBrowser::new(results) else {
        return Ok(BrowseExit::Back);
    };

    loop {
        console.clear_screen()?;
        console.write_line(&browser.render())?;
        console.write_line(&browser.options())?;

        let input = console.read_line("Enter the first letter of your option >> ")?;
        let accepted = match BrowseCommand::parse(&input) {
            Some(BrowseCommand::Next) => browser.next(),
            Some(BrowseCommand::Previous) => browser.previous(),
            Some(BrowseCommand::Edit) => {
                let edited = edit_entry(console, repo, browser.current())?;
                return Ok(BrowseExit::Edited(edited));
            }
            Some(BrowseCommand::Delete) => {
                let entry = browser.current().clone();
                repo.delete(&entry)?;
                info!(entry_id = entry.id, "Entry deleted");
                console.pause("\nEntry deleted. Press enter for search menu")?;
                return Ok(BrowseExit::Deleted(entry));
            }
            Some(BrowseCommand::Back) => return Ok(BrowseExit::Back),
            None => false,
        };

        if accepted {
            debug!("Browsing result {} of {}", browser.cursor(), browser.len());
        } else {
            console.pause("Wrong selection. Press enter to try again")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::repository::{EntryFilter, MemoryEntryRepository, NewEntry};
    use chrono::NaiveDate;

    fn two_entry_repo() -> (MemoryEntryRepository, Vec<Entry>) {
        let mut repo = MemoryEntryRepository::new();
        for (title, day) in [("first", 1), ("second", 2)] {
            repo.create(NewEntry {
                name: "Ann".to_string(),
                title: title.to_string(),
                date: NaiveDate::from_ymd_opt(2017, 12, day).unwrap(),
                time: 30,
                notes: String::new(),
            })
            .unwrap();
        }
        let results = repo.all().unwrap();
        (repo, results)
    }

    #[test]
    fn test_empty_results_have_no_browser() {
        assert!(ResultBrowser::new(Vec::new()).is_none());
    }

    #[test]
    fn test_paging_two_results() {
        let (_, results) = two_entry_repo();
        let mut browser = ResultBrowser::new(results).unwrap();

        assert_eq!(browser.cursor(), 1);
        assert!(!browser.previous());
        assert_eq!(browser.cursor(), 1);

        assert!(browser.next());
        assert_eq!(browser.cursor(), 2);

        assert!(!browser.next());
        assert_eq!(browser.cursor(), 2);

        assert!(browser.previous());
        assert_eq!(browser.cursor(), 1);
    }

    #[test]
    fn test_options_advertise_only_possible_moves() {
        let (_, results) = two_entry_repo();
        let mut browser = ResultBrowser::new(results).unwrap();

        assert!(browser.options().contains("[N]ext"));
        assert!(!browser.options().contains("[P]revious"));

        browser.next();
        assert!(!browser.options().contains("[N]ext"));
        assert!(browser.options().contains("[P]revious"));
    }

    #[test]
    fn test_render_shows_position_and_fields() {
        let (_, results) = two_entry_repo();
        let browser = ResultBrowser::new(results).unwrap();
        let screen = browser.render();

        assert!(screen.contains("Result 1 of 2"));
        assert!(screen.contains("Entry title: second"));
        assert!(screen.contains("Entry name: Ann"));
        assert!(screen.contains("Time spent: 30"));
        assert!(screen.contains("Date: 2017-12-02"));
    }

    #[test]
    fn test_browse_rejects_next_past_end_then_goes_back() {
        let (mut repo, results) = two_entry_repo();
        let mut console = ScriptedConsole::new(["n", "n", "", "p", "b"]);

        let exit = browse(&mut console, &mut repo, results).unwrap();

        assert_eq!(exit, BrowseExit::Back);
        let out = console.output();
        assert_eq!(out.matches("Wrong selection").count(), 1);
        assert_eq!(out.matches("Result 2 of 2").count(), 2);
        assert_eq!(out.matches("Result 1 of 2").count(), 2);
        assert_eq!(repo.all().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_command_keeps_cursor() {
        let (mut repo, results) = two_entry_repo();
        let mut console = ScriptedConsole::new(["x", "", "B"]);

        let exit = browse(&mut console, &mut repo, results).unwrap();

        assert_eq!(exit, BrowseExit::Back);
        assert_eq!(console.output().matches("Result 1 of 2").count(), 2);
        assert!(!console.output().contains("Result 2 of 2"));
    }

    #[test]
    fn test_delete_removes_current_entry() {
        let (mut repo, results) = two_entry_repo();
        let mut console = ScriptedConsole::new(["n", "d", ""]);

        let exit = browse(&mut console, &mut repo, results.clone()).unwrap();

        assert_eq!(exit, BrowseExit::Deleted(results[1].clone()));
        let remaining = repo.all().unwrap();
        assert_eq!(remaining, vec![results[0].clone()]);
        assert!(repo
            .filter(&EntryFilter::NameEquals("Ann".to_string()))
            .unwrap()
            .iter()
            .all(|e| e.id != results[1].id));
    }

    #[test]
    fn test_edit_updates_current_entry_and_exits() {
        let (mut repo, results) = two_entry_repo();
        let mut console = ScriptedConsole::new(["e", "2", "120", ""]);

        let exit = browse(&mut console, &mut repo, results.clone()).unwrap();

        let expected = Entry {
            time: 120,
            ..results[0].clone()
        };
        assert_eq!(exit, BrowseExit::Edited(expected.clone()));
        assert_eq!(repo.all().unwrap()[0], expected);
    }
}
