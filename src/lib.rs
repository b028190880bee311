//! strata generates the starter layout of a data-pipeline project:
//! configuration folders, notebooks, orchestration DAGs, numbered data
//! stages and per-layer pipeline packages, plus boilerplate files.

/// Command-line interface module for the strata application
pub mod cli;

/// Project configuration: defaults, file loading and validation
/// Supports JSON and YAML files
pub mod config;

/// Built-in defaults and manifest constants
pub mod constants;

/// Error types and handling for the strata application
pub mod error;

/// Directory list and file map computed from a configuration
pub mod layout;

/// Logger initialisation
pub mod logger;

/// Writes a layout to disk
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering for generated files
pub mod renderer;

/// Templates of the generated files
pub mod templates;
