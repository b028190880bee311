//! Computes the scaffold layout for a configuration.
//! Nothing here touches the filesystem: the result is the ordered list of
//! directories and the map of file contents that the processor writes.

use crate::config::Config;
use crate::constants::{MANIFEST_DEPENDENCIES, MIN_PYTHON_VERSION, PROJECT_VERSION};
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::templates;
use indexmap::IndexMap;
use log::debug;
use serde_json::json;

/// Directories created for every project regardless of its layers.
pub const BASE_DIRECTORIES: [&str; 4] = ["conf/base", "conf/local", "notebooks", "dags"];

/// Directories and files of a scaffold, as paths relative to the base path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Directories in creation order
    pub directories: Vec<String>,
    /// File contents keyed by path, in write order
    pub files: IndexMap<String, String>,
}

/// Data directory of the layer at 1-based `index`, e.g. `data/01_raw`.
pub fn data_dir(index: usize, layer: &str) -> String {
    format!("data/{index:02}_{layer}")
}

/// Source package directory of the project.
pub fn package_dir(project_name: &str) -> String {
    format!("src/{project_name}")
}

/// Pipeline source directory of a layer.
pub fn pipeline_dir(project_name: &str, layer: &str) -> String {
    format!("src/{project_name}/pipelines/{layer}")
}

impl Layout {
    /// Builds the layout for `config`.
    ///
    /// Directories: the fixed base entries, the source package, then a data
    /// directory and a pipeline directory per layer. Files: the project
    /// boilerplate followed by a package marker, nodes module and pipeline
    /// module per layer. A repeated path keeps its first position and takes
    /// the later content.
    ///
    /// # Errors
    /// * `Error::TemplateError` if a file template fails to render
    pub fn plan(config: &Config, renderer: &dyn TemplateRenderer) -> Result<Self> {
        let project_name = config.project_name.as_str();
        let context = json!({
            "project_name": project_name,
            "description": config.description,
            "author_name": config.author_name,
            "version": PROJECT_VERSION,
            "python_version": MIN_PYTHON_VERSION,
            "dependencies": MANIFEST_DEPENDENCIES,
        });

        let mut directories: Vec<String> =
            BASE_DIRECTORIES.iter().map(|dir| dir.to_string()).collect();
        directories.push(package_dir(project_name));
        for (index, layer) in config.layers.iter().enumerate() {
            directories.push(data_dir(index + 1, layer));
            directories.push(pipeline_dir(project_name, layer));
        }

        let package = package_dir(project_name);
        let project_files = [
            ("README.md".to_string(), templates::README),
            (".gitignore".to_string(), templates::GITIGNORE),
            ("LICENSE".to_string(), templates::LICENSE),
            (format!("{package}/__init__.py"), templates::PACKAGE_MARKER),
            (format!("{package}/hooks.py"), templates::HOOKS),
            (format!("{package}/settings.py"), templates::SETTINGS),
            (format!("dags/{project_name}_pipeline_dag.py"), templates::DAG),
            ("pyproject.toml".to_string(), templates::MANIFEST),
        ];

        let mut files = IndexMap::new();
        for (path, template) in project_files {
            files.insert(path, renderer.render(template, &context)?);
        }

        for layer in &config.layers {
            let layer_dir = pipeline_dir(project_name, layer);
            let layer_context = json!({ "layer": layer });
            for (name, template) in [
                ("__init__.py", templates::PACKAGE_MARKER),
                ("nodes.py", templates::LAYER_NODES),
                ("pipeline.py", templates::LAYER_PIPELINE),
            ] {
                files.insert(
                    format!("{layer_dir}/{name}"),
                    renderer.render(template, &layer_context)?,
                );
            }
        }

        debug!(
            "Planned {} directories and {} files",
            directories.len(),
            files.len()
        );
        Ok(Self { directories, files })
    }
}
