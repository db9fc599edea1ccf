//! Platform and package manager detection.
//!
//! Lookups for installed packages and indexed files depend on tools that
//! differ per OS and distribution. This module decides which family is
//! available and resolves helper binaries on `PATH` without shelling out.

use super::command::shell_quote;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOS => "macOS",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
        };
        f.write_str(name)
    }
}

/// System package manager family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Yum,
    Dnf,
    Apt,
    Pacman,
    Homebrew,
}

impl PackageManager {
    /// Order in which package managers are looked for on `PATH`.
    pub const DETECTION_ORDER: [PackageManager; 5] = [
        PackageManager::Yum,
        PackageManager::Dnf,
        PackageManager::Apt,
        PackageManager::Pacman,
        PackageManager::Homebrew,
    ];

    /// Binary the installed-package query invokes.
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Yum => "yum",
            PackageManager::Dnf => "dnf",
            PackageManager::Apt => "dpkg",
            PackageManager::Pacman => "pacman",
            PackageManager::Homebrew => "brew",
        }
    }

    /// Name used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Yum => "yum",
            PackageManager::Dnf => "dnf",
            PackageManager::Apt => "apt",
            PackageManager::Pacman => "pacman",
            PackageManager::Homebrew => "homebrew",
        }
    }

    /// Shell command that prints a line only when `package` is installed.
    ///
    /// `arch` is only used by the rpm family, whose listings suffix the
    /// package name with the architecture.
    pub fn installed_query(&self, package: &str, arch: &str) -> String {
        let rpm_name = shell_quote(&format!("{}.{}", package, arch));
        let quoted = shell_quote(package);
        match self {
            PackageManager::Yum => format!("yum list installed | grep {}", rpm_name),
            PackageManager::Dnf => format!("dnf list installed | grep {}", rpm_name),
            PackageManager::Apt => format!("dpkg -l {} 2>/dev/null | grep '^ii'", quoted),
            PackageManager::Pacman => format!("pacman -Q {} 2>/dev/null", quoted),
            PackageManager::Homebrew => format!("brew list --versions {}", quoted),
        }
    }

    /// First package manager whose binary is on `path_entries`.
    pub fn detect(path_entries: &[PathBuf]) -> Option<Self> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|pm| resolve_tool_path(pm.binary(), path_entries).is_some())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CPU architecture name as package managers print it (`x86_64`, `aarch64`).
pub fn host_arch() -> &'static str {
    std::env::consts::ARCH
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does not use
/// `which`, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(target_os = "windows") {
            let exe = dir.join(format!("{}.exe", tool));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
