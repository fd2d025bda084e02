//! Parsing and validation of `gatekit.toml` project configuration files.
//!
//! This crate reads the optional project configuration file and produces a
//! strongly-typed [`ProjectConfig`], then merges it with command-line
//! overrides into the settings for one export.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{resolve_export, ExportOverrides, ResolvedExport, DEFAULT_DESIGN, DEFAULT_OUTPUT};
pub use types::*;
