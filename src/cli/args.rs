//! CLI argument definitions.
//!
//! Every flag is optional; a bare `envcheck` runs the built-in checks.

use crate::shell::PackageManager;
use clap::Parser;
use std::path::PathBuf;

/// envcheck - Verify that native build prerequisites are installed.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ./.envcheck.yml)
    #[arg(short, long, env = "ENVCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Package manager to query instead of detecting one
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
