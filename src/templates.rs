//! Contents of the generated files, as MiniJinja templates.
//!
//! Top-level templates see `project_name`, `description`, `author_name`,
//! `version`, `python_version` and `dependencies`. Layer templates also see
//! `layer`.

pub const README: &str = "# {{ project_name | headline }}\n\n{{ description }}\n";

pub const GITIGNORE: &str = "*.pyc\n__pycache__/\ndata/\nconf/local/\n.env";

pub const LICENSE: &str = "MIT License";

pub const PACKAGE_MARKER: &str = "";

pub const HOOKS: &str = "# Kedro project hooks";

pub const SETTINGS: &str = "# Kedro project settings";

pub const DAG: &str = "# Airflow DAG for the {{ project_name | headline }} pipeline";

/// `pyproject.toml`. Strings are written as TOML basic strings.
pub const MANIFEST: &str = r#"[project]
name = {{ project_name | toml_string }}
version = {{ version | toml_string }}
description = {{ description | toml_string }}
authors = [
  { name = {{ author_name | toml_string }} }
]
dependencies = [{% for dependency in dependencies %}
  {{ dependency | toml_string }}{% if not loop.last %},{% endif %}{% endfor %}
]
requires-python = ">={{ python_version }}"
"#;

pub const LAYER_NODES: &str = "# Nodes for the {{ layer }} layer";

pub const LAYER_PIPELINE: &str = "# Pipeline definition for the {{ layer }} layer";
