#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `worklog` binary with a clean environment,
/// pointed at `db_path`. Additional environment variables or arguments can be
/// configured by the caller.
pub fn base_worklog_command(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("worklog").expect("worklog binary not built");
    configure_worklog_command(&mut cmd, db_path);
    cmd
}

/// Applies the standard test environment to an existing `Command`.
pub fn configure_worklog_command(cmd: &mut Command, db_path: &Path) {
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    if let Some(parent) = db_path.parent() {
        cmd.env("HOME", parent);
    }
    cmd.env("WORKLOG_DB", db_path);
}

/// Joins operator answers into the text fed on standard input.
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
