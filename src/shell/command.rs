//! Shell command execution.
//!
//! Probe commands are plain strings that may contain pipes and redirects
//! (`yum list installed | grep boost.x86_64`), so they always run through
//! the platform shell rather than being split into argv.

use crate::error::{EnvcheckError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// First line of standard output, without its line terminator.
    pub fn first_line(&self) -> &str {
        first_line(&self.stdout)
    }
}

/// Something that can run a probe command and capture its output.
///
/// Implemented by [`ShellRunner`] for real runs and by
/// [`MockRunner`](crate::shell::mock::MockRunner) in tests.
pub trait CommandRunner {
    /// Run `command` once and capture its output.
    ///
    /// A command that runs and exits non-zero is still `Ok`; only a failure
    /// to launch the shell is an error.
    fn run(&self, command: &str) -> Result<CommandResult>;
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        execute(command)
    }
}

/// Shell executable and the flag that makes it run a single command string.
pub fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}

/// Execute a shell command, capturing stdout and stderr.
///
/// Stdin is closed so a command that waits for input sees EOF instead of
/// blocking the run.
pub fn execute(command: &str) -> Result<CommandResult> {
    let start = Instant::now();
    let (shell, flag) = shell_invocation();

    let output = Command::new(shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| EnvcheckError::CommandFailed {
            command: command.to_string(),
            message: e.to_string(),
        })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// The first line of `output`, with `\n` or `\r\n` removed.
///
/// Returns an empty string when there is no output at all.
pub fn first_line(output: &str) -> &str {
    output.lines().next().unwrap_or("")
}

/// The first line of `output` including its `\n`.
///
/// Empty only when there is no output at all; a blank first line is `"\n"`.
pub fn raw_first_line(output: &str) -> &str {
    output.split_inclusive('\n').next().unwrap_or("")
}

/// Quote `word` for `/bin/sh` when it contains anything beyond a safe set.
///
/// Plain names like `libyaml-cpp.a` or `boost.x86_64` are returned as-is.
pub fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._-+/=:@,%".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}
