//! Command-line interface for envcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check run behind the binary

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::run_check;
