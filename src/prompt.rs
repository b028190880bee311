//! User input and interaction handling.
//! Collects the project name and description when no configuration file is
//! given.

use crate::config::{Config, Overrides};
use crate::error::{Error, Result};
use dialoguer::Input;

/// Source of free-text answers.
pub trait Prompter {
    /// Asks a single question and returns the raw answer.
    ///
    /// # Arguments
    /// * `prompt` - Question shown to the user
    /// * `default` - Value displayed as the default and returned for empty input
    fn text(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Prompter that reads answers from the terminal via dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }
}

/// Trims an answer, treating a blank one as "keep the default".
fn non_blank(answer: String) -> Option<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}

/// Asks for the project name and description.
///
/// # Arguments
/// * `prompter` - Answer source
/// * `defaults` - Configuration whose values are offered as defaults
///
/// # Returns
/// * `Result<Overrides>` - The non-blank answers; blank answers are `None`
///
/// # Errors
/// * `Error::ConfigError` if reading an answer fails
pub fn prompt_overrides(prompter: &dyn Prompter, defaults: &Config) -> Result<Overrides> {
    let project_name = prompter.text("Project name", &defaults.project_name)?;
    let description = prompter.text("Description", &defaults.description)?;

    Ok(Overrides {
        project_name: non_blank(project_name),
        description: non_blank(description),
    })
}
