//! Configuration types deserialized from `gatekit.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `gatekit.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// Export defaults.
    #[serde(default)]
    pub export: ExportConfig,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// Registered design exported when none is named on the command line.
    #[serde(default)]
    pub design: Option<String>,
}

/// The `[export]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Output path, relative to the working directory.
    #[serde(default)]
    pub output: Option<String>,
    /// Indent the JSON output.
    #[serde(default)]
    pub pretty: bool,
    /// Include gate layouts and subcircuit names in the output.
    #[serde(default)]
    pub include_layout: bool,
}
