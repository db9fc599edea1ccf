//! Scripted command runner for tests.
//!
//! `MockRunner` answers probe commands from a table instead of spawning
//! processes, and records every command it was asked to run so tests can
//! assert each probe ran exactly once.

use crate::error::{EnvcheckError, Result};
use crate::shell::command::{CommandResult, CommandRunner};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Scripted {
    Output { stdout: String, exit_code: i32 },
    SpawnFailure(String),
}

/// Command runner that replays scripted output.
///
/// Commands without a scripted response behave like a shell that could not
/// find the program: no stdout and exit code 127.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, Scripted>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `command` to succeed and print `stdout`.
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            Scripted::Output {
                stdout: stdout.to_string(),
                exit_code: 0,
            },
        );
        self
    }

    /// Script `command` to print `stdout` and exit with `exit_code`.
    pub fn with_exit(mut self, command: &str, stdout: &str, exit_code: i32) -> Self {
        self.responses.insert(
            command.to_string(),
            Scripted::Output {
                stdout: stdout.to_string(),
                exit_code,
            },
        );
        self
    }

    /// Script `command` so the shell itself fails to launch.
    pub fn with_spawn_failure(mut self, command: &str, message: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            Scripted::SpawnFailure(message.to_string()),
        );
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How many times `command` was run.
    pub fn call_count(&self, command: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == command).count()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        self.calls.borrow_mut().push(command.to_string());

        match self.responses.get(command) {
            Some(Scripted::Output { stdout, exit_code }) if *exit_code == 0 => Ok(
                CommandResult::success(stdout.clone(), String::new(), Duration::ZERO),
            ),
            Some(Scripted::Output { stdout, exit_code }) => Ok(CommandResult::failure(
                Some(*exit_code),
                stdout.clone(),
                String::new(),
                Duration::ZERO,
            )),
            Some(Scripted::SpawnFailure(message)) => Err(EnvcheckError::CommandFailed {
                command: command.to_string(),
                message: message.clone(),
            }),
            None => Ok(CommandResult::failure(
                Some(127),
                String::new(),
                format!("sh: {}: command not found\n", command),
                Duration::ZERO,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_command_looks_not_found() {
        let runner = MockRunner::new();
        let result = runner.run("g++ --version").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(127));
        assert_eq!(result.first_line(), "");
    }

    #[test]
    fn scripted_output_is_returned() {
        let runner = MockRunner::new().with_output("openssl version", "OpenSSL 3.0.1\n");
        let result = runner.run("openssl version").unwrap();
        assert!(result.success);
        assert_eq!(result.first_line(), "OpenSSL 3.0.1");
    }

    #[test]
    fn scripted_exit_code_is_kept() {
        let runner = MockRunner::new().with_exit("locate libyaml-cpp.a", "", 1);
        let result = runner.run("locate libyaml-cpp.a").unwrap();
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let runner = MockRunner::new().with_spawn_failure("cmake --version", "EAGAIN");
        assert!(matches!(
            runner.run("cmake --version"),
            Err(EnvcheckError::CommandFailed { .. })
        ));
    }

    #[test]
    fn calls_are_recorded_in_order() {
        let runner = MockRunner::new();
        runner.run("a").unwrap();
        runner.run("b").unwrap();
        runner.run("a").unwrap();
        assert_eq!(runner.calls(), vec!["a", "b", "a"]);
        assert_eq!(runner.call_count("a"), 2);
        assert_eq!(runner.call_count("c"), 0);
    }
}
