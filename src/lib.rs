//! envcheck - Verify that native build prerequisites are installed.
//!
//! envcheck probes the host for a C++ toolchain and the libraries a native
//! server build needs (ragel, cmake, yaml-cpp, OpenSSL, Boost). Each found
//! dependency prints its version line; each missing one prints the shell
//! commands that install it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.envcheck.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency definitions and probing
//! - [`runner`] - Sequential check orchestration
//! - [`shell`] - Shell command execution and platform detection
//! - [`ui`] - Report output
//!
//! # Example
//!
//! ```
//! use envcheck::requirements::{ProbeContext, Prober, RequirementRegistry};
//! use envcheck::runner::CheckRunner;
//! use envcheck::shell::{MockRunner, Platform};
//! use envcheck::ui::Reporter;
//!
//! let shell = MockRunner::new().with_output("cmake --version", "cmake version 3.20.2\n");
//! let context = ProbeContext {
//!     platform: Platform::Linux,
//!     package_manager: None,
//!     arch: "x86_64".to_string(),
//!     path_entries: vec![],
//! };
//! let registry = RequirementRegistry::builtin();
//! let mut reporter = Reporter::new(Vec::new(), Vec::new(), false);
//!
//! CheckRunner::new(&registry, Prober::new(&shell, &context))
//!     .run(&mut reporter)
//!     .unwrap();
//!
//! let (out, _) = reporter.into_inner();
//! assert!(String::from_utf8(out).unwrap().contains("cmake version 3.20.2\n"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{EnvcheckError, Result};
