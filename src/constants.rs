//! Common constants used throughout strata.

/// Project name used when none is given interactively.
pub const DEFAULT_PROJECT_NAME: &str = "My Project";

/// Description used when none is given interactively.
pub const DEFAULT_DESCRIPTION: &str = "";

/// Author written into the manifest of interactively configured projects.
pub const DEFAULT_AUTHOR_NAME: &str = "Rodrigo Monteiro Pereira";

/// Pipeline layers of interactively configured projects, in stage order.
pub const DEFAULT_LAYERS: [&str; 4] = ["raw", "intermediate", "primary", "feature"];

/// Version written into the generated project manifest.
pub const PROJECT_VERSION: &str = "0.1.0";

/// Minimum Python version required by the generated project.
pub const MIN_PYTHON_VERSION: &str = "3.10";

/// Dependencies listed in the generated project manifest.
pub const MANIFEST_DEPENDENCIES: [&str; 6] = [
    "kedro",
    "pyspark",
    "apache-airflow",
    "great-expectations",
    "pandas",
    "requests",
];

/// Configuration file extensions parsed as YAML. Everything else is JSON.
pub const YAML_EXTENSIONS: [&str; 2] = ["yml", "yaml"];
