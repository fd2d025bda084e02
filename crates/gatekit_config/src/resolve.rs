//! Export resolution: merging command-line overrides with the configuration.

use crate::types::ProjectConfig;
use std::path::PathBuf;

/// Design exported when neither the command line nor the config names one.
pub const DEFAULT_DESIGN: &str = "register";

/// Output path used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT: &str = "project.json";

/// Values given on the command line. `None` and `false` defer to the config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOverrides {
    /// Design name.
    pub design: Option<String>,
    /// Output path.
    pub output: Option<PathBuf>,
    /// Force pretty output.
    pub pretty: bool,
    /// Force layout output.
    pub include_layout: bool,
}

/// The settings for one export, with every value decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExport {
    /// Design name.
    pub design: String,
    /// Output path.
    pub output: PathBuf,
    /// Indent the JSON output.
    pub pretty: bool,
    /// Include layouts and names.
    pub include_layout: bool,
}

/// Resolves export settings: command line first, then config, then defaults.
///
/// Flags only switch options on, so a config that enables `pretty` cannot be
/// overridden back to compact from the command line.
pub fn resolve_export(config: Option<&ProjectConfig>, overrides: &ExportOverrides) -> ResolvedExport {
    let design = overrides
        .design
        .clone()
        .or_else(|| config.and_then(|c| c.project.design.clone()))
        .unwrap_or_else(|| DEFAULT_DESIGN.to_string());

    let output = overrides
        .output
        .clone()
        .or_else(|| config.and_then(|c| c.export.output.as_ref().map(PathBuf::from)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let export = config.map(|c| &c.export);
    ResolvedExport {
        design,
        output,
        pretty: overrides.pretty || export.is_some_and(|e| e.pretty),
        include_layout: overrides.include_layout || export.is_some_and(|e| e.include_layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    fn config() -> ProjectConfig {
        load_config_from_str(
            r#"
[project]
name = "demo"
design = "adder"

[export]
output = "build/out.json"
pretty = true
"#,
        )
        .unwrap()
    }

    #[test]
    fn defaults_without_config() {
        let resolved = resolve_export(None, &ExportOverrides::default());
        assert_eq!(resolved.design, DEFAULT_DESIGN);
        assert_eq!(resolved.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!resolved.pretty);
        assert!(!resolved.include_layout);
    }

    #[test]
    fn config_fills_gaps() {
        let config = config();
        let resolved = resolve_export(Some(&config), &ExportOverrides::default());
        assert_eq!(resolved.design, "adder");
        assert_eq!(resolved.output, PathBuf::from("build/out.json"));
        assert!(resolved.pretty);
        assert!(!resolved.include_layout);
    }

    #[test]
    fn command_line_wins() {
        let config = config();
        let overrides = ExportOverrides {
            design: Some("and".to_string()),
            output: Some(PathBuf::from("and.json")),
            pretty: false,
            include_layout: true,
        };
        let resolved = resolve_export(Some(&config), &overrides);
        assert_eq!(resolved.design, "and");
        assert_eq!(resolved.output, PathBuf::from("and.json"));
        assert!(resolved.pretty);
        assert!(resolved.include_layout);
    }
}
