use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::Parser;

/// A terminal work-log tracker
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Path to the work-log database (overrides WORKLOG_DB)
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Print verbose log output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Format of log output on stderr
    #[arg(long, value_name = "FORMAT", value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON], default_value = LOG_FORMAT_TEXT)]
    pub log_format: String,
}

impl CliArgs {
    /// Whether logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}
