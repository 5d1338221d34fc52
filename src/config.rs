//! Project configuration for embedsmith.
//! Holds the parameters a generation run is driven by, their defaults,
//! and loading from JSON or YAML documents.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The resolved set of parameters a project is generated from.
///
/// Every field is a plain string. Values are not checked against any list of
/// known MCUs or toolchains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub project_name: String,
    pub mcu: String,
    pub compiler: String,
    pub flash_size: String,
    pub ram_size: String,
    pub flash_start: String,
    pub ram_start: String,
    pub author: String,
    pub version: String,
    pub license: String,
    pub description: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: "firmware".to_string(),
            mcu: "cortex-m4".to_string(),
            compiler: "arm-none-eabi-gcc".to_string(),
            flash_size: "512K".to_string(),
            ram_size: "128K".to_string(),
            flash_start: "0x08000000".to_string(),
            ram_start: "0x20000000".to_string(),
            author: "Embedded Developer".to_string(),
            version: "1.0.0".to_string(),
            license: "MIT".to_string(),
            description: "Embedded firmware project".to_string(),
        }
    }
}

/// Optional per-field values that take precedence over a base configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub project_name: Option<String>,
    pub mcu: Option<String>,
    pub compiler: Option<String>,
    pub flash_size: Option<String>,
    pub ram_size: Option<String>,
    pub flash_start: Option<String>,
    pub ram_start: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub description: Option<String>,
}

impl ProjectConfig {
    /// Returns a new configuration with every field present in `overrides` replaced.
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            project_name: overrides.project_name.unwrap_or(self.project_name),
            mcu: overrides.mcu.unwrap_or(self.mcu),
            compiler: overrides.compiler.unwrap_or(self.compiler),
            flash_size: overrides.flash_size.unwrap_or(self.flash_size),
            ram_size: overrides.ram_size.unwrap_or(self.ram_size),
            flash_start: overrides.flash_start.unwrap_or(self.flash_start),
            ram_start: overrides.ram_start.unwrap_or(self.ram_start),
            author: overrides.author.unwrap_or(self.author),
            version: overrides.version.unwrap_or(self.version),
            license: overrides.license.unwrap_or(self.license),
            description: overrides.description.unwrap_or(self.description),
        }
    }

    /// Flattens the configuration into the JSON object templates are rendered against.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "project_name": self.project_name,
            "mcu": self.mcu,
            "compiler": self.compiler,
            "flash_size": self.flash_size,
            "ram_size": self.ram_size,
            "flash_start": self.flash_start,
            "ram_start": self.ram_start,
            "author": self.author,
            "version": self.version,
            "license": self.license,
            "description": self.description,
        })
    }

    /// Pretty-printed JSON document recording this configuration.
    pub fn to_metadata(&self) -> String {
        // A struct of plain strings always serializes.
        let mut out =
            serde_json::to_string_pretty(self).expect("configuration serializes to JSON");
        out.push('\n');
        out
    }
}

/// Parses a configuration document.
///
/// The content is parsed as JSON first and as YAML when that fails.
///
/// # Errors
/// * `Error::ConfigLoadError` if the content is neither a valid JSON nor a valid YAML
///   configuration, has unknown keys, or has non-string values
pub fn parse_config(content: &str, origin: &str) -> Result<ProjectConfig> {
    match serde_json::from_str::<ProjectConfig>(content) {
        Ok(config) => Ok(config),
        Err(json_err) => {
            debug!("'{origin}' is not a JSON configuration ({json_err}), trying YAML");
            serde_yaml::from_str::<ProjectConfig>(content).map_err(|yaml_err| {
                Error::ConfigLoadError {
                    path: origin.to_string(),
                    reason: if content.trim_start().starts_with('{') {
                        json_err.to_string()
                    } else {
                        yaml_err.to_string()
                    },
                }
            })
        }
    }
}

/// Loads a configuration document from disk.
///
/// # Arguments
/// * `path` - Path to a JSON or YAML configuration file
///
/// # Returns
/// * `Result<ProjectConfig>` - Configuration with missing keys set to their defaults
///
/// # Errors
/// * `Error::ConfigLoadError` if the file cannot be read or parsed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ProjectConfig> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    debug!("Loading configuration from {origin}");

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::ConfigLoadError { path: origin.clone(), reason: e.to_string() })?;

    parse_config(&content, &origin)
}
