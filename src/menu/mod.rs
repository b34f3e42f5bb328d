//! The top-level menu state machine.
//!
//! Every screen is a [`MenuState`]. Handling a state returns the next one,
//! and [`MenuController::run`] loops until it reaches [`MenuState::Quit`].
//! Nothing recurses, so a long session does not grow the stack.
//!
//! ```text
//! MainMenu ──1──▶ AddEntry ──▶ MainMenu
//!    │ 2
//!    ▼
//! SearchMenu ──1..5──▶ Search(mode) ──▶ SearchMenu
//!    │ 6
//!    ▼
//! MainMenu ──3──▶ Quit
//! ```

use crate::console::Console;
use crate::errors::AppResult;
use crate::ops::{add_entry, run_results, search, SearchMode};
use crate::repository::EntryRepository;
use tracing::{debug, info};

const MAIN_MENU: &str = "\n\n\t\tMAIN MENU:\n\n\
    \t1 - Add new entry\n\
    \t2 - Search for existing entry\n\
    \t3 - Quit\n";

const SELECT_PROMPT: &str = "Select a number from the previous options >> ";

/// A screen of the interactive interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    AddEntry,
    SearchMenu,
    Search(SearchMode),
    Quit,
}

/// Owns the console and repository for one interactive session.
pub struct MenuController<C, R> {
    console: C,
    repo: R,
}

impl<C: Console, R: EntryRepository> MenuController<C, R> {
    pub fn new(console: C, repo: R) -> Self {
        MenuController { console, repo }
    }

    /// Runs from the main menu until the operator quits.
    ///
    /// Quitting clears the screen and returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns an error if the console closes or a repository call fails.
    pub fn run(&mut self) -> AppResult<()> {
        let mut state = MenuState::MainMenu;
        while state != MenuState::Quit {
            let next = self.step(state)?;
            debug!("Menu transition {:?} -> {:?}", state, next);
            state = next;
        }
        self.console.clear_screen()?;
        info!("Session ended");
        Ok(())
    }

    /// Handles one state and returns the state to move to.
    pub fn step(&mut self, state: MenuState) -> AppResult<MenuState> {
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::AddEntry => {
                add_entry(&mut self.console, &mut self.repo)?;
                Ok(MenuState::MainMenu)
            }
            MenuState::SearchMenu => self.search_menu(),
            MenuState::Search(mode) => {
                let results = search(mode, &mut self.console, &self.repo)?;
                run_results(&mut self.console, &mut self.repo, results)?;
                Ok(MenuState::SearchMenu)
            }
            MenuState::Quit => Ok(MenuState::Quit),
        }
    }

    /// The console, for inspecting what a finished session printed.
    /// Tests use it to read `ScriptedConsole` output.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// The repository, for inspecting what a finished session stored.
    /// Tests use it to check entries after `run`.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn main_menu(&mut self) -> AppResult<MenuState> {
        self.console.clear_screen()?;
        self.console.write_line(MAIN_MENU)?;
        loop {
            let selection = self.console.read_line(SELECT_PROMPT)?;
            match selection.trim() {
                "1" => return Ok(MenuState::AddEntry),
                "2" => return Ok(MenuState::SearchMenu),
                "3" => return Ok(MenuState::Quit),
                _ => self.console.write_line("Please select a number from 1 to 3")?,
            }
        }
    }

    fn search_menu(&mut self) -> AppResult<MenuState> {
        self.console.clear_screen()?;
        self.console.write_line("\n\n\t\tSEARCH MENU\n")?;
        for mode in SearchMode::ALL {
            self.console
                .write_line(&format!("\t{} - {}", mode.selection(), mode))?;
        }
        self.console.write_line("\t6 - Return to main menu\n")?;

        loop {
            let selection = self.console.read_line(SELECT_PROMPT)?;
            if let Some(mode) = SearchMode::from_selection(&selection) {
                return Ok(MenuState::Search(mode));
            }
            if selection.trim() == "6" {
                return Ok(MenuState::MainMenu);
            }
            self.console
                .write_line("Please select a number from 1 to 6")?;
        }
    }
}
