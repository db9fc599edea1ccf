//! Dependency definitions and probing.
//!
//! This module describes the native build prerequisites envcheck looks
//! for, renders the command that detects each one on the current host,
//! and classifies what the command printed.
//!
//! # Modules
//!
//! - [`registry`] - Dependency definitions, per-platform probe commands
//! - [`checker`] - Runs a probe and classifies its output
//! - [`status`] - Probe outcome types

pub mod checker;
pub mod registry;
pub mod status;

pub use checker::Prober;
pub use registry::{
    Dependency, ProbeContext, ProbeKind, RequirementRegistry, Resolution, ResolvedProbe,
};
pub use status::{ProbeOutcome, ProbeResult};
