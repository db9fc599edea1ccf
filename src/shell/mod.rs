//! Shell command execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    execute, first_line, raw_first_line, shell_quote, CommandResult, CommandRunner, ShellRunner,
};
pub use mock::MockRunner;
pub use platform::{
    host_arch, parse_system_path, resolve_tool_path, PackageManager, Platform,
};
