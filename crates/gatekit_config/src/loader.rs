//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// The file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "gatekit.toml";

/// Loads and validates `gatekit.toml` from a project directory.
///
/// Returns `Ok(None)` when the directory has no configuration file; the file
/// is optional.
pub fn load_config(project_dir: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(None);
    }
    load_config_file(&config_path).map(Some)
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `gatekit.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are usable.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.trim().is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if matches!(&config.project.design, Some(design) if design.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "project.design must not be empty".to_string(),
        ));
    }
    if matches!(&config.export.output, Some(output) if output.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "export.output must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[project]
name = "demo"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "demo");
        assert_eq!(config.project.design, None);
        assert_eq!(config.export.output, None);
        assert!(!config.export.pretty);
        assert!(!config.export.include_layout);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "demo"
design = "adder"

[export]
output = "build/project.json"
pretty = true
include_layout = true
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.design.as_deref(), Some("adder"));
        assert_eq!(config.export.output.as_deref(), Some("build/project.json"));
        assert!(config.export.pretty);
        assert!(config.export.include_layout);
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[project]
name = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn absent_project_table_is_a_parse_error() {
        let err = load_config_from_str("[export]\npretty = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn empty_output_errors() {
        let toml = r#"
[project]
name = "demo"

[export]
output = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn empty_design_errors() {
        let toml = r#"
[project]
name = "demo"
design = " "
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn unknown_key_errors() {
        let toml = r#"
[project]
name = "demo"
top = "src/top.vhd"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), None);
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[project]\nname = \"demo\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.project.name, "demo");
    }

    #[test]
    fn explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(&dir.path().join("other.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
