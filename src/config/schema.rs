//! Configuration schema.
//!
//! Everything is optional: an empty or absent file runs the built-in probes
//! with the detected package manager.

use crate::shell::PackageManager;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a `.envcheck.yml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvcheckConfig {
    /// Force a package manager family instead of detecting one on PATH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,

    /// Dependency ids to leave out of the run
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skip: Vec<String>,

    /// Project-specific dependencies, probed after the built-ins
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<CustomDependency>,
}

/// A dependency declared in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomDependency {
    /// Unique identifier, used by `skip`
    pub id: String,

    /// Name shown in the install header (defaults to the id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// How to probe for the dependency
    pub check: CustomCheck,

    /// Shell lines printed when the dependency is missing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub install: Vec<String>,
}

/// Probe type for a custom dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomCheck {
    /// Run a command; its first output line is the version text
    Command {
        /// Command to run
        command: String,
    },

    /// Look a file up through the platform file index
    IndexedFile {
        /// File name to look for
        file: String,
    },

    /// Ask the package manager whether a package is installed
    InstalledPackage {
        /// Package name per package manager family
        packages: BTreeMap<PackageManager, String>,
    },
}
