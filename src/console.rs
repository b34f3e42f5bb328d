//! The operator input/output boundary.
//!
//! Every interactive flow reads and writes through [`Console`]. Reading a line
//! is the only point where the application blocks on the operator.

use crate::constants::CLEAR_SCREEN_SEQUENCE;
use crate::errors::{AppError, AppResult};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal used by the menus.
pub trait Console {
    /// Shows `prompt` and blocks until one line of input is available.
    ///
    /// The returned text has its line terminator removed and is otherwise
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InputClosed` if input ends before a line arrives.
    fn read_line(&mut self, prompt: &str) -> AppResult<String>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> AppResult<()>;

    /// Clears the screen.
    fn clear_screen(&mut self) -> AppResult<()>;

    /// Shows `message` and waits for the operator to press enter.
    fn pause(&mut self, message: &str) -> AppResult<()> {
        self.read_line(message).map(|_| ())
    }
}

/// [`Console`] over a reader/writer pair, normally stdin and stdout.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(strip_line_ending(line))
    }

    fn write_line(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn clear_screen(&mut self) -> AppResult<()> {
        write!(self.output, "{}", CLEAR_SCREEN_SEQUENCE)?;
        self.output.flush()?;
        Ok(())
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// [`Console`] fed from a queue of prepared answers, recording everything shown.
///
/// When the queue runs dry, `read_line` fails with `AppError::InputClosed`, so
/// a flow that keeps re-prompting terminates instead of hanging.
///
/// # Examples
///
/// ```
/// use worklog::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["first"]);
/// assert_eq!(console.read_line("> ").unwrap(), "first");
/// assert!(console.read_line("> ").is_err());
/// assert!(console.output().contains("> "));
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Everything written so far, prompts included.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Number of times the screen was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        self.output.push_str(prompt);
        let line = self.inputs.pop_front().ok_or(AppError::InputClosed)?;
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> AppResult<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn clear_screen(&mut self) -> AppResult<()> {
        self.clears += 1;
        Ok(())
    }
}
