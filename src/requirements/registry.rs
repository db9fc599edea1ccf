//! Dependency registry and definitions.
//!
//! Defines which dependencies exist, how to probe for them on each
//! platform, and what to tell the user when one is missing. The registry
//! holds the built-in native build prerequisites followed by any custom
//! dependencies from config, in a fixed order.

use crate::config::{validate, CustomCheck, CustomDependency, EnvcheckConfig};
use crate::error::Result;
use crate::shell::{host_arch, parse_system_path, shell_quote, PackageManager, Platform};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// How a dependency is probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeKind {
    /// Run a command as-is (usually a version query)
    Command(String),

    /// Look a file up by name through the platform file index
    IndexedFile(String),

    /// Ask the package manager for an installed package, by family
    InstalledPackage(BTreeMap<PackageManager, String>),
}

/// A dependency definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Identifier (e.g., "gxx", "boost-devel")
    pub id: String,
    /// Name used in the install header (e.g., "g++")
    pub name: String,
    /// How to probe for it
    pub kind: ProbeKind,
    /// Shell lines that install it, printed when it is missing
    pub install_steps: Vec<String>,
}

/// Everything a probe needs to know about the host.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    /// Current operating system family
    pub platform: Platform,
    /// Package manager family for installed-package probes
    pub package_manager: Option<PackageManager>,
    /// CPU architecture name used by rpm-style listings
    pub arch: String,
    /// Directories searched for helper tools
    pub path_entries: Vec<PathBuf>,
}

impl ProbeContext {
    /// Inspect the running system.
    ///
    /// `package_manager` forces a family; otherwise the first one found on
    /// `PATH` is used.
    pub fn detect(package_manager: Option<PackageManager>) -> Self {
        let path_entries = parse_system_path();
        let package_manager = package_manager.or_else(|| PackageManager::detect(&path_entries));

        Self {
            platform: Platform::current(),
            package_manager,
            arch: host_arch().to_string(),
            path_entries,
        }
    }
}

/// A probe command ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProbe {
    /// Shell command line
    pub command: String,
    /// Lookup tool the command relies on, when that is not the dependency itself
    pub helper: Option<String>,
}

/// Outcome of turning a dependency into a concrete command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A command exists for this host.
    Ready(ResolvedProbe),
    /// No equivalent command exists here.
    Unsupported(String),
}

impl Dependency {
    /// Header line of the instruction block.
    pub fn instruction_header(&self) -> String {
        format!("Please install {}. You can run this code", self.name)
    }

    /// Full instruction block, header first.
    pub fn instruction_block(&self) -> Vec<String> {
        std::iter::once(self.instruction_header())
            .chain(self.install_steps.iter().cloned())
            .collect()
    }

    /// Render the probe command for `ctx`.
    pub fn resolve(&self, ctx: &ProbeContext) -> Resolution {
        match &self.kind {
            ProbeKind::Command(command) => Resolution::Ready(ResolvedProbe {
                command: command.clone(),
                helper: None,
            }),
            ProbeKind::IndexedFile(file) => match ctx.platform {
                Platform::Linux => Resolution::Ready(ResolvedProbe {
                    command: format!("locate {}", shell_quote(file)),
                    helper: Some("locate".to_string()),
                }),
                Platform::MacOS => Resolution::Ready(ResolvedProbe {
                    command: format!("mdfind -name {}", shell_quote(file)),
                    helper: Some("mdfind".to_string()),
                }),
                Platform::Windows => {
                    Resolution::Unsupported(format!("no file index lookup on {}", ctx.platform))
                }
            },
            ProbeKind::InstalledPackage(packages) => {
                let Some(pm) = ctx.package_manager else {
                    return Resolution::Unsupported(
                        "no supported package manager found on PATH".to_string(),
                    );
                };
                match packages.get(&pm) {
                    Some(package) => Resolution::Ready(ResolvedProbe {
                        command: pm.installed_query(package, &ctx.arch),
                        helper: Some(pm.binary().to_string()),
                    }),
                    None => Resolution::Unsupported(format!(
                        "no {} package is known for {}",
                        pm, self.name
                    )),
                }
            }
        }
    }
}

impl From<&CustomDependency> for Dependency {
    fn from(custom: &CustomDependency) -> Self {
        let kind = match &custom.check {
            CustomCheck::Command { command } => ProbeKind::Command(command.clone()),
            CustomCheck::IndexedFile { file } => ProbeKind::IndexedFile(file.clone()),
            CustomCheck::InstalledPackage { packages } => {
                ProbeKind::InstalledPackage(packages.clone())
            }
        };

        let id = custom.id.trim().to_string();
        Self {
            name: custom.name.clone().unwrap_or_else(|| id.clone()),
            id,
            kind,
            install_steps: custom.install.clone(),
        }
    }
}

/// Ordered list of dependencies to probe.
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    dependencies: Vec<Dependency>,
}

impl Default for RequirementRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

fn packages(entries: &[(PackageManager, &str)]) -> BTreeMap<PackageManager, String> {
    entries
        .iter()
        .map(|(pm, name)| (*pm, name.to_string()))
        .collect()
}

impl RequirementRegistry {
    /// The built-in native build prerequisites, in probe order.
    pub fn builtin() -> Self {
        use PackageManager::*;

        let dependencies = vec![
            Dependency {
                id: "gxx".to_string(),
                name: "g++".to_string(),
                kind: ProbeKind::Command("g++ --version".to_string()),
                install_steps: steps(&["cd", "sudo yum -y install gcc-c++"]),
            },
            Dependency {
                id: "ragel".to_string(),
                name: "ragel".to_string(),
                kind: ProbeKind::Command("ragel --version".to_string()),
                install_steps: steps(&[
                    "cd",
                    "wget http://www.colm.net/files/ragel/ragel-6.10.tar.gz",
                    "tar -xzvf ragel-6.10.tar.gz",
                    "cd ./ragel-6.10",
                    "./configure",
                    "make",
                    "sudo make install",
                ]),
            },
            Dependency {
                id: "cmake".to_string(),
                name: "cmake".to_string(),
                kind: ProbeKind::Command("cmake --version".to_string()),
                install_steps: steps(&["cd", "sudo yum -y install cmake"]),
            },
            Dependency {
                id: "yaml-cpp".to_string(),
                name: "yaml-cpp".to_string(),
                kind: ProbeKind::IndexedFile("libyaml-cpp.a".to_string()),
                install_steps: steps(&[
                    "cd",
                    "wget https://github.com/jbeder/yaml-cpp/archive/refs/tags/yaml-cpp-0.6.2.tar.gz",
                    "tar -xzvf yaml-cpp-0.6.2.tar.gz",
                    "cd yaml-cpp-yaml-cpp-0.6.2/",
                    "mkdir build",
                    "cd build",
                    "cmake -DYAML_BUILD_SHARED_LIBS=on ..",
                    "make -j4",
                    "sudo make install",
                ]),
            },
            Dependency {
                id: "openssl".to_string(),
                name: "openssl".to_string(),
                kind: ProbeKind::Command("openssl version".to_string()),
                install_steps: steps(&[
                    "cd",
                    "sudo yum -y install gcc libffi-devel zlib* openssl-devel",
                    "wget https://www.openssl.org/source/openssl-3.0.1.tar.gz",
                    "tar -xzvf openssl-3.0.1.tar.gz",
                    "cd openssl-3.0.1",
                    "./Configure --prefix=/usr/local/openssl",
                    "make",
                    "sudo make install",
                ]),
            },
            Dependency {
                id: "boost".to_string(),
                name: "boost".to_string(),
                kind: ProbeKind::InstalledPackage(packages(&[
                    (Yum, "boost"),
                    (Dnf, "boost"),
                    (Apt, "libboost-system*"),
                    (Pacman, "boost-libs"),
                    (Homebrew, "boost"),
                ])),
                install_steps: steps(&["cd", "sudo yum -y install boost"]),
            },
            Dependency {
                id: "boost-devel".to_string(),
                name: "boost".to_string(),
                kind: ProbeKind::InstalledPackage(packages(&[
                    (Yum, "boost-devel"),
                    (Dnf, "boost-devel"),
                    (Apt, "libboost-dev"),
                    (Pacman, "boost"),
                    (Homebrew, "boost"),
                ])),
                install_steps: steps(&["cd", "sudo yum -y install boost-devel"]),
            },
        ];

        Self { dependencies }
    }

    /// Built-ins adjusted by config: skipped ids removed, custom ones appended.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if the config does not validate
    /// against the built-in ids.
    pub fn with_config(config: &EnvcheckConfig) -> Result<Self> {
        let builtin = Self::builtin();
        let builtin_ids: Vec<&str> = builtin.ids().collect();
        validate(config, &builtin_ids)?;

        let dependencies = builtin
            .dependencies
            .iter()
            .cloned()
            .chain(config.dependencies.iter().map(Dependency::from))
            .filter(|dep| !config.skip.contains(&dep.id))
            .collect();

        Ok(Self { dependencies })
    }

    /// Get a dependency by id.
    pub fn get(&self, id: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.id == id)
    }

    /// Dependencies in probe order.
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter()
    }

    /// Ids in probe order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(|d| d.id.as_str())
    }

    /// Number of dependencies.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Whether there is nothing to probe.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
