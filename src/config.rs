//! Configuration handling for strata.
//! This module loads the project configuration from a JSON or YAML file, or
//! builds it from the built-in defaults merged with interactive answers, and
//! validates it before anything touches the filesystem.

use crate::constants::{
    DEFAULT_AUTHOR_NAME, DEFAULT_DESCRIPTION, DEFAULT_LAYERS, DEFAULT_PROJECT_NAME,
    YAML_EXTENSIONS,
};
use crate::error::{Error, Result};
use crate::prompt::{prompt_overrides, Prompter};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;
use std::sync::LazyLock;

/// Names used as single path components must match this pattern.
static PATH_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/\\\x00]+$").expect("valid pattern"));

/// Project configuration driving the generated layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the project, used for the source package and the DAG file
    pub project_name: String,
    /// Free-form description written to the README and manifest
    pub description: String,
    /// Author recorded in the manifest
    pub author_name: String,
    /// Pipeline layers in stage order
    #[serde(default)]
    pub layers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
            layers: DEFAULT_LAYERS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Values collected interactively that replace fields of the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub project_name: Option<String>,
    pub description: Option<String>,
}

impl Config {
    /// Returns a copy of this configuration with every present override applied.
    pub fn with_overrides(&self, overrides: Overrides) -> Self {
        let mut config = self.clone();
        if let Some(project_name) = overrides.project_name {
            config.project_name = project_name;
        }
        if let Some(description) = overrides.description {
            config.description = description;
        }
        config
    }

    /// Checks that the configuration can be materialized safely.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the project name or a layer is empty, is `.`
    ///   or `..`, contains a path separator, or if a layer name repeats
    pub fn validate(&self) -> Result<()> {
        check_component("project_name", &self.project_name)?;

        let mut seen = HashSet::new();
        for layer in &self.layers {
            check_component("layer", layer)?;
            if !seen.insert(layer.as_str()) {
                return Err(Error::ConfigError(format!("duplicate layer '{layer}'")));
            }
        }
        Ok(())
    }
}

fn check_component(field: &str, value: &str) -> Result<()> {
    if !PATH_COMPONENT.is_match(value) || value == "." || value == ".." {
        return Err(Error::ConfigError(format!(
            "{field} '{value}' must be a single non-empty path component"
        )));
    }
    Ok(())
}

fn is_yaml<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| YAML_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn invalid_format<E: Display>(e: E) -> Error {
    Error::ConfigError(format!("Invalid configuration format: {e}"))
}

/// Parses configuration content as YAML or JSON.
///
/// YAML scalars keep their type: a number or boolean where a string is
/// expected is rejected, as it is for JSON.
///
/// # Errors
/// * `Error::ConfigError` if the content is malformed, a required key is
///   missing or a value has the wrong type
pub fn parse_config(content: &str, yaml: bool) -> Result<Config> {
    if yaml {
        let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(invalid_format)?;
        let value = serde_json::to_value(value).map_err(invalid_format)?;
        serde_json::from_value(value).map_err(invalid_format)
    } else {
        serde_json::from_str(content).map_err(invalid_format)
    }
}

/// Loads and validates a configuration file.
///
/// Files ending in `.yml` or `.yaml` are read as YAML, anything else as JSON.
///
/// # Errors
/// * `Error::ConfigError` if the file does not exist, cannot be read, cannot
///   be parsed or fails validation
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid configuration path: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("Cannot read {}: {e}", config_path.display()))
    })?;

    let config = parse_config(&content, is_yaml(config_path))?;
    config.validate()?;
    Ok(config)
}

/// Resolves the configuration for this run.
///
/// Reads `config_file` when given; otherwise asks the prompter for the
/// project name and description and fills everything else from
/// [`Config::default`]. The result is always validated.
pub fn get_config(config_file: Option<&Path>, prompter: &dyn Prompter) -> Result<Config> {
    match config_file {
        Some(path) => load_config(path),
        None => {
            println!("No configuration file given, answer the prompts below.");
            let defaults = Config::default();
            let overrides = prompt_overrides(prompter, &defaults)?;
            let config = defaults.with_overrides(overrides);
            debug!("Using interactive configuration: {config:?}");
            config.validate()?;
            Ok(config)
        }
    }
}
