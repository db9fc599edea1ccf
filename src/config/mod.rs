//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use envcheck::config::{load_config, DEFAULT_CONFIG_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "skip: [ragel]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.skip, vec!["ragel".to_string()]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, DEFAULT_CONFIG_FILE};
pub use schema::{CustomCheck, CustomDependency, EnvcheckConfig};
pub use validator::{validate, validate_config, ValidationError};
