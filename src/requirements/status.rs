//! Probe outcome types.
//!
//! Each probe produces a `ProbeOutcome`. Only `Present` suppresses the
//! instruction block; the other variants all print it, and the two
//! failure-like variants also carry a cause for a warning line.

use crate::shell::{first_line, raw_first_line};

/// The result of probing a single dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probe printed at least one line, even a blank one.
    Present {
        /// First output line, without its terminator (may be empty)
        detail: String,
    },

    /// The probe ran and printed nothing at all.
    Absent,

    /// The probe could not be carried out (shell failed to start, or the
    /// lookup tool it relies on is not installed).
    ProbeError {
        /// Human-readable cause
        cause: String,
    },

    /// This platform has no way to run this probe.
    Unsupported {
        /// Why no probe command exists here
        reason: String,
    },
}

impl ProbeOutcome {
    /// Classify captured standard output.
    ///
    /// Presence is decided on the first line with its terminator, so output
    /// that opens with a blank line is still present.
    pub fn from_output(stdout: &str) -> Self {
        if raw_first_line(stdout).is_empty() {
            ProbeOutcome::Absent
        } else {
            ProbeOutcome::Present {
                detail: first_line(stdout).to_string(),
            }
        }
    }

    /// Whether the dependency was found.
    pub fn is_present(&self) -> bool {
        matches!(self, ProbeOutcome::Present { .. })
    }

    /// Whether the install instructions should be printed.
    pub fn needs_instructions(&self) -> bool {
        !self.is_present()
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ProbeOutcome::Present { .. } => "present",
            ProbeOutcome::Absent => "absent",
            ProbeOutcome::ProbeError { .. } => "probe error",
            ProbeOutcome::Unsupported { .. } => "unsupported",
        }
    }

    /// Warning text for outcomes that are not a plain present/absent answer.
    pub fn warning(&self, dependency: &str) -> Option<String> {
        match self {
            ProbeOutcome::ProbeError { cause } => Some(format!(
                "could not check for {}: {}",
                dependency, cause
            )),
            ProbeOutcome::Unsupported { reason } => Some(format!(
                "cannot check for {} on this system: {}",
                dependency, reason
            )),
            ProbeOutcome::Present { .. } | ProbeOutcome::Absent => None,
        }
    }
}

/// The outcome for one dependency, keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Dependency id
    pub dependency: String,
    /// What the probe found
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    /// Pair an outcome with the id it belongs to.
    pub fn new(dependency: impl Into<String>, outcome: ProbeOutcome) -> Self {
        Self {
            dependency: dependency.into(),
            outcome,
        }
    }

    /// Warning line for this result, named after the dependency id.
    pub fn warning(&self) -> Option<String> {
        self.outcome.warning(&self.dependency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_line_is_present() {
        let outcome = ProbeOutcome::from_output("g++ (GCC) 8.5.0 20210514\nCopyright\n");
        assert_eq!(
            outcome,
            ProbeOutcome::Present {
                detail: "g++ (GCC) 8.5.0 20210514".to_string()
            }
        );
        assert!(outcome.is_present());
        assert!(!outcome.needs_instructions());
    }

    #[test]
    fn any_content_counts_as_present() {
        assert!(ProbeOutcome::from_output("garbage").is_present());
        assert!(ProbeOutcome::from_output(" ").is_present());
    }

    #[test]
    fn blank_first_line_is_present_with_empty_detail() {
        assert_eq!(
            ProbeOutcome::from_output("\nx version 1.0\n"),
            ProbeOutcome::Present {
                detail: String::new()
            }
        );
        assert!(ProbeOutcome::from_output("\r\n").is_present());
    }

    #[test]
    fn empty_output_is_absent() {
        let outcome = ProbeOutcome::from_output("");
        assert_eq!(outcome, ProbeOutcome::Absent);
        assert!(outcome.needs_instructions());
        assert!(outcome.warning("cmake").is_none());
    }

    #[test]
    fn probe_error_needs_instructions_and_warns() {
        let outcome = ProbeOutcome::ProbeError {
            cause: "'locate' not found on PATH".to_string(),
        };
        assert!(outcome.needs_instructions());
        let warning = outcome.warning("yaml-cpp").unwrap();
        assert!(warning.contains("yaml-cpp"));
        assert!(warning.contains("'locate' not found on PATH"));
    }

    #[test]
    fn unsupported_needs_instructions_and_warns() {
        let outcome = ProbeOutcome::Unsupported {
            reason: "no supported package manager found on PATH".to_string(),
        };
        assert!(outcome.needs_instructions());
        assert!(outcome.warning("boost").unwrap().contains("package manager"));
    }

    #[test]
    fn present_has_no_warning() {
        let outcome = ProbeOutcome::Present {
            detail: "cmake version 3.20.2".to_string(),
        };
        assert!(outcome.warning("cmake").is_none());
    }

    #[test]
    fn result_warning_uses_dependency_id() {
        let result = ProbeResult::new(
            "boost-devel",
            ProbeOutcome::ProbeError {
                cause: "'yum' not found on PATH".to_string(),
            },
        );
        assert_eq!(
            result.warning().as_deref(),
            Some("could not check for boost-devel: 'yum' not found on PATH")
        );
        assert!(ProbeResult::new("cmake", ProbeOutcome::Absent).warning().is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(ProbeOutcome::Absent.label(), "absent");
        assert_eq!(
            ProbeOutcome::Unsupported {
                reason: String::new()
            }
            .label(),
            "unsupported"
        );
    }
}
