//! Parsing and prompting for the two validated entry fields.
//!
//! `ask_date` and `ask_time` keep asking until the operator types something
//! that parses. There is no retry limit; only end of input stops them.

use crate::console::Console;
use crate::constants::DATE_FORMAT_ISO;
use crate::errors::AppResult;
use chrono::NaiveDate;
use std::num::ParseIntError;
use thiserror::Error;
use tracing::debug;

pub const DATE_PROMPT: &str = "\nEnter Date format: YYYY-MM-DD >> ";
pub const TIME_PROMPT: &str = "\nEnter the time spent (minutes) >> ";

/// Why a date typed by the operator was refused.
#[derive(Debug, Error)]
pub enum DateInputError {
    /// The year is not exactly four digits, or is signed or padded.
    #[error("the year must be exactly four digits")]
    Year,

    /// The text does not name a calendar date in `YYYY-MM-DD` form.
    #[error(transparent)]
    Format(#[from] chrono::ParseError),
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// The year must be exactly four digits, so stored dates always sort
/// chronologically as text. Month and day ranges are checked against the
/// calendar, so `2017-02-30` is rejected.
///
/// # Examples
///
/// ```
/// use worklog::validate::parse_date;
///
/// assert!(parse_date("2017-12-17").is_ok());
/// assert!(parse_date("2017-02-30").is_err());
/// assert!(parse_date("17/12/2017").is_err());
/// assert!(parse_date("17-12-17").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, DateInputError> {
    let bytes = text.as_bytes();
    let four_digit_year =
        bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-';
    if !four_digit_year {
        return Err(DateInputError::Year);
    }
    Ok(NaiveDate::parse_from_str(text, DATE_FORMAT_ISO)?)
}

/// Parses a base-10 number of minutes. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use worklog::validate::parse_time;
///
/// assert_eq!(parse_time("45").unwrap(), 45);
/// assert_eq!(parse_time(" 120 ").unwrap(), 120);
/// assert!(parse_time("4.5").is_err());
/// ```
pub fn parse_time(text: &str) -> Result<i64, ParseIntError> {
    text.trim().parse()
}

/// Prompts until a valid calendar date is entered.
///
/// # Errors
///
/// Only fails if the console does; bad input is reported and asked again.
pub fn ask_date(console: &mut dyn Console) -> AppResult<NaiveDate> {
    loop {
        let input = console.read_line(DATE_PROMPT)?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                debug!("Rejected date input {:?}: {}", input, e);
                console.write_line(&format!("Wrong format ({}), Try again", e))?;
            }
        }
    }
}

/// Prompts until an integer number of minutes is entered.
///
/// # Errors
///
/// Only fails if the console does; bad input is reported and asked again.
pub fn ask_time(console: &mut dyn Console) -> AppResult<i64> {
    loop {
        let input = console.read_line(TIME_PROMPT)?;
        match parse_time(&input) {
            Ok(time) => return Ok(time),
            Err(e) => {
                debug!("Rejected time input {:?}: {}", input, e);
                console.write_line("Wrong format it should be an integer, Try again")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::errors::AppError;

    #[test]
    fn test_parse_date_enforces_calendar() {
        assert_eq!(
            parse_date("2016-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2016, 2, 29).unwrap()
        );
        assert!(parse_date("2017-02-29").is_err());
        assert!(parse_date("2017-13-01").is_err());
        assert!(parse_date("2017-04-31").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_parse_date_requires_four_digit_year() {
        for input in [
            "17-12-17",
            "99-01-01",
            "-0001-01-01",
            "+2017-12-17",
            " 2017-12-17",
            "02017-12-17",
        ] {
            assert!(
                matches!(parse_date(input), Err(DateInputError::Year)),
                "{:?} should be rejected",
                input
            );
        }

        assert_eq!(
            parse_date("0001-01-01").unwrap(),
            NaiveDate::from_ymd_opt(1, 1, 1).unwrap()
        );
        assert!(matches!(
            parse_date("2017-12-17 "),
            Err(DateInputError::Format(_))
        ));
    }

    #[test]
    fn test_ask_date_rejects_short_year() {
        let mut console = ScriptedConsole::new(["17-12-17", "2017-12-17"]);

        let date = ask_date(&mut console).unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 12, 17).unwrap());
        assert!(console.output().contains("four digits"));
    }

    #[test]
    fn test_parse_time_accepts_integers_only() {
        assert_eq!(parse_time("0").unwrap(), 0);
        assert_eq!(parse_time("+15").unwrap(), 15);
        assert_eq!(parse_time("-5").unwrap(), -5);
        assert!(parse_time("").is_err());
        assert!(parse_time("forty").is_err());
        assert!(parse_time("1e3").is_err());
    }

    #[test]
    fn test_ask_date_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(["12/17/2017", "2017-02-30", "2017-12-17"]);

        let date = ask_date(&mut console).unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 12, 17).unwrap());
        assert_eq!(console.output().matches("Try again").count(), 2);
        assert_eq!(console.output().matches(DATE_PROMPT).count(), 3);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_ask_time_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(["", "45 minutes", "45"]);

        assert_eq!(ask_time(&mut console).unwrap(), 45);
        assert_eq!(
            console
                .output()
                .matches("Wrong format it should be an integer")
                .count(),
            2
        );
    }

    #[test]
    fn test_ask_never_returns_invalid_value() {
        let mut console = ScriptedConsole::new(["nope", "still nope"]);
        assert!(matches!(ask_date(&mut console), Err(AppError::InputClosed)));

        let mut console = ScriptedConsole::new(["x"]);
        assert!(matches!(ask_time(&mut console), Err(AppError::InputClosed)));
    }
}
