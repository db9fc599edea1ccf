//! The check command: wire config, host detection, and output together.

use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::requirements::{ProbeContext, Prober, RequirementRegistry};
use crate::runner::{CheckRunner, RunSummary};
use crate::shell::ShellRunner;
use crate::ui::Reporter;
use std::path::Path;

/// Run every check against the real system, reporting on stdout.
pub fn run_check(cli: &Cli, project_root: &Path) -> Result<RunSummary> {
    let config = load_config(project_root, cli.config.as_deref())?;
    let registry = RequirementRegistry::with_config(&config)?;

    let context = ProbeContext::detect(cli.package_manager.or(config.package_manager));
    tracing::debug!(
        "Host: {} {}, package manager: {:?}",
        context.platform,
        context.arch,
        context.package_manager
    );

    let styled = !cli.no_color && console::colors_enabled_stderr();
    let mut reporter = Reporter::stdio(styled);

    let shell = ShellRunner;
    let runner = CheckRunner::new(&registry, Prober::new(&shell, &context));
    runner.run(&mut reporter)
}
