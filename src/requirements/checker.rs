//! Dependency prober.
//!
//! The `Prober` turns a [`Dependency`] into a [`ProbeResult`]: it renders
//! the platform command, checks that any lookup tool is installed, runs the
//! command once, and classifies the first line of its output.

use crate::requirements::registry::{Dependency, ProbeContext, Resolution};
use crate::requirements::status::{ProbeOutcome, ProbeResult};
use crate::shell::{resolve_tool_path, CommandRunner};

/// Probes dependencies through a [`CommandRunner`].
pub struct Prober<'a> {
    runner: &'a dyn CommandRunner,
    context: &'a ProbeContext,
}

impl<'a> Prober<'a> {
    /// Create a prober for the given host context.
    pub fn new(runner: &'a dyn CommandRunner, context: &'a ProbeContext) -> Self {
        Self { runner, context }
    }

    /// Probe one dependency.
    ///
    /// The command is run at most once; its captured output is the only
    /// input to the decision and to the reported detail.
    pub fn probe(&self, dependency: &Dependency) -> ProbeResult {
        ProbeResult::new(dependency.id.as_str(), self.outcome(dependency))
    }

    fn outcome(&self, dependency: &Dependency) -> ProbeOutcome {
        let resolved = match dependency.resolve(self.context) {
            Resolution::Ready(resolved) => resolved,
            Resolution::Unsupported(reason) => {
                tracing::debug!("{}: no probe for this host: {}", dependency.id, reason);
                return ProbeOutcome::Unsupported { reason };
            }
        };

        if let Some(helper) = &resolved.helper {
            if resolve_tool_path(helper, &self.context.path_entries).is_none() {
                tracing::debug!("{}: helper '{}' not on PATH", dependency.id, helper);
                return ProbeOutcome::ProbeError {
                    cause: format!("'{}' not found on PATH", helper),
                };
            }
        }

        tracing::debug!("{}: running `{}`", dependency.id, resolved.command);
        let result = match self.runner.run(&resolved.command) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("{}: {}", dependency.id, e);
                return ProbeOutcome::ProbeError {
                    cause: e.to_string(),
                };
            }
        };

        if !result.stderr.trim().is_empty() {
            tracing::debug!("{}: stderr: {}", dependency.id, result.stderr.trim_end());
        }

        // Exit status is logged but never consulted.
        let outcome = ProbeOutcome::from_output(&result.stdout);
        tracing::debug!(
            "{}: {} (exit {:?}, success: {}, {:?})",
            dependency.id,
            outcome.label(),
            result.exit_code,
            result.success,
            result.duration
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::registry::{ProbeKind, RequirementRegistry};
    use crate::shell::{MockRunner, PackageManager, Platform};

    fn ctx(pm: Option<PackageManager>) -> ProbeContext {
        ProbeContext {
            platform: Platform::Linux,
            package_manager: pm,
            arch: "x86_64".to_string(),
            path_entries: vec![],
        }
    }

    fn command_dep(command: &str) -> Dependency {
        Dependency {
            id: "tool".to_string(),
            name: "tool".to_string(),
            kind: ProbeKind::Command(command.to_string()),
            install_steps: vec!["cd".to_string()],
        }
    }

    #[test]
    fn present_when_first_line_non_empty() {
        let runner = MockRunner::new().with_output(
            "g++ --version",
            "g++ (GCC) 8.5.0 20210514 (Red Hat 8.5.0-4)\nCopyright (C) 2018\n",
        );
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);
        let registry = RequirementRegistry::builtin();

        let outcome = prober.probe(registry.get("gxx").unwrap()).outcome;
        assert_eq!(
            outcome,
            ProbeOutcome::Present {
                detail: "g++ (GCC) 8.5.0 20210514 (Red Hat 8.5.0-4)".to_string()
            }
        );
    }

    #[test]
    fn present_when_first_line_is_blank() {
        let runner = MockRunner::new().with_output("x --version", "\nx version 1.0\n");
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);

        assert_eq!(
            prober.probe(&command_dep("x --version")).outcome,
            ProbeOutcome::Present {
                detail: String::new()
            }
        );
    }

    #[test]
    fn result_carries_dependency_id() {
        let runner = MockRunner::new();
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);
        let registry = RequirementRegistry::builtin();

        let result = prober.probe(registry.get("boost-devel").unwrap());
        assert_eq!(result.dependency, "boost-devel");
        assert!(result.warning().unwrap().contains("boost-devel"));
    }

    #[test]
    fn command_runs_exactly_once() {
        let runner = MockRunner::new().with_output("cmake --version", "cmake version 3.20.2\n");
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);

        prober.probe(&command_dep("cmake --version"));
        assert_eq!(runner.call_count("cmake --version"), 1);
    }

    #[test]
    fn absent_when_command_not_found() {
        let runner = MockRunner::new();
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);

        assert_eq!(
            prober.probe(&command_dep("ragel --version")).outcome,
            ProbeOutcome::Absent
        );
    }

    #[test]
    fn absent_when_command_succeeds_silently() {
        let runner = MockRunner::new().with_output("openssl version", "");
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);

        assert_eq!(
            prober.probe(&command_dep("openssl version")).outcome,
            ProbeOutcome::Absent
        );
    }

    #[test]
    fn output_decides_even_on_non_zero_exit() {
        let runner = MockRunner::new().with_exit(
            "ragel --version",
            "Ragel State Machine Compiler version 6.10\n",
            1,
        );
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);

        assert!(prober.probe(&command_dep("ragel --version")).outcome.is_present());
    }

    #[test]
    fn spawn_failure_is_probe_error() {
        let runner = MockRunner::new()
            .with_spawn_failure("cmake --version", "Resource temporarily unavailable");
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);

        match prober.probe(&command_dep("cmake --version")).outcome {
            ProbeOutcome::ProbeError { cause } => {
                assert!(cause.contains("Resource temporarily unavailable"))
            }
            other => panic!("Expected ProbeError, got {:?}", other),
        }
    }

    #[test]
    fn missing_helper_is_probe_error_and_skips_run() {
        let runner = MockRunner::new()
            .with_output("locate libyaml-cpp.a", "/usr/local/lib/libyaml-cpp.a\n");
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);
        let registry = RequirementRegistry::builtin();

        let outcome = prober.probe(registry.get("yaml-cpp").unwrap()).outcome;
        assert_eq!(
            outcome,
            ProbeOutcome::ProbeError {
                cause: "'locate' not found on PATH".to_string()
            }
        );
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn no_package_manager_is_unsupported() {
        let runner = MockRunner::new();
        let context = ctx(None);
        let prober = Prober::new(&runner, &context);
        let registry = RequirementRegistry::builtin();

        assert!(matches!(
            prober.probe(registry.get("boost").unwrap()).outcome,
            ProbeOutcome::Unsupported { .. }
        ));
        assert!(runner.calls().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn helper_on_path_runs_query() {
        use std::os::unix::fs::PermissionsExt;
        let temp = tempfile::TempDir::new().unwrap();
        let yum = temp.path().join("yum");
        std::fs::write(&yum, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&yum, std::fs::Permissions::from_mode(0o755)).unwrap();

        let query = "yum list installed | grep boost-devel.x86_64";
        let runner = MockRunner::new().with_output(
            query,
            "boost-devel.x86_64    1.66.0-10.el8    @appstream\n",
        );
        let mut context = ctx(Some(PackageManager::Yum));
        context.path_entries = vec![temp.path().to_path_buf()];
        let prober = Prober::new(&runner, &context);
        let registry = RequirementRegistry::builtin();

        assert_eq!(
            prober.probe(registry.get("boost-devel").unwrap()).outcome,
            ProbeOutcome::Present {
                detail: "boost-devel.x86_64    1.66.0-10.el8    @appstream".to_string()
            }
        );
        assert_eq!(runner.calls(), vec![query]);
    }
}
