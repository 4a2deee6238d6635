use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.jsp.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JspConfig {
    pub input: String,
    pub output: String,
    pub root_name: String,
    pub naming: NamingConfig,
}

impl Default for JspConfig {
    fn default() -> Self {
        Self {
            input: "schema.json".to_string(),
            output: "output/generated.proto".to_string(),
            root_name: "Envelope".to_string(),
            naming: NamingConfig::default(),
        }
    }
}

/// How nested type names and enum constants are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub subtypes: SubtypeNaming,
    pub enum_values: EnumValueCase,
}

/// Naming of nested messages and enums derived from a property name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtypeNaming {
    /// Uppercase the first character only.
    #[default]
    Capitalize,
    PascalCase,
}

/// Rendering of enum values as proto constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumValueCase {
    #[default]
    Preserve,
    ScreamingSnake,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".jsp.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<JspConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: JspConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# jsp configuration
input: schema.json
output: output/generated.proto
root_name: Envelope

naming:
  subtypes: capitalize      # capitalize | pascal_case
  enum_values: preserve     # preserve | screaming_snake
"#
}
