//! Writes a scaffold layout to disk.
//!
//! Directories are created first, then files, in layout order. Existing
//! directories are reused and existing files are overwritten. A failure
//! stops the run immediately; whatever was created before it stays on disk.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{get_config, Config},
    error::{Error, Result},
    layout::Layout,
    prompt::Prompter,
    renderer::TemplateRenderer,
};

/// Absolute paths created by a run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Resolves `base_path` against the current directory and creates it.
///
/// # Errors
/// * `Error::IoError` if the current directory cannot be read or the base
///   path cannot be created
pub fn ensure_base_dir<P: AsRef<Path>>(base_path: P) -> Result<PathBuf> {
    let base_path = base_path.as_ref();
    let abs_path = if base_path.is_absolute() {
        base_path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(Error::io_at(base_path))?
            .join(base_path)
    };

    fs::create_dir_all(&abs_path).map_err(Error::io_at(&abs_path))?;
    Ok(abs_path)
}

/// Joins a `/` separated relative path onto `base`.
pub fn resolve_target_path<P: AsRef<Path>>(base: P, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(base.as_ref().to_path_buf(), |path, part| path.join(part))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(Error::io_at(path))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            create_dir(parent)?;
        }
    }
    fs::write(path, content).map_err(Error::io_at(path))
}

/// Creates every directory and writes every file of `layout` under `base`.
///
/// # Errors
/// * `Error::IoError` on the first directory or file that cannot be created
pub fn materialize<P: AsRef<Path>>(base: P, layout: &Layout) -> Result<Generated> {
    let base = base.as_ref();
    let mut generated = Generated::default();

    for directory in &layout.directories {
        let target = resolve_target_path(base, directory);
        create_dir(&target)?;
        println!("Created directory: '{}'", target.display());
        generated.directories.push(target);
    }

    for (file, content) in &layout.files {
        let target = resolve_target_path(base, file);
        debug!("Writing {} bytes to {}", content.len(), target.display());
        write_file(&target, content)?;
        println!("Created file: '{}'", target.display());
        generated.files.push(target);
    }

    Ok(generated)
}

/// Generates the scaffold for `config` under `base_path`.
///
/// Creates the base path if needed, plans the layout and materializes it.
///
/// # Errors
/// * `Error::IoError` if the base path, a directory or a file cannot be created
/// * `Error::TemplateError` if a file template fails to render
pub fn generate<P: AsRef<Path>>(
    base_path: P,
    config: &Config,
    renderer: &dyn TemplateRenderer,
) -> Result<Generated> {
    let base = ensure_base_dir(base_path)?;
    println!("Setting up project at: '{}'", base.display());

    let layout = Layout::plan(config, renderer)?;
    materialize(&base, &layout)
}

/// Resolves the configuration and generates its scaffold under `base_path`.
///
/// The configuration is read (or prompted for) and validated before the
/// base path is touched, so a bad configuration leaves the disk unchanged.
///
/// # Returns
/// * `Result<(Config, Generated)>` - The configuration used and what was created
pub fn scaffold<P: AsRef<Path>>(
    config_file: Option<&Path>,
    base_path: P,
    prompter: &dyn Prompter,
    renderer: &dyn TemplateRenderer,
) -> Result<(Config, Generated)> {
    let config = get_config(config_file, prompter)?;
    let generated = generate(base_path, &config, renderer)?;
    Ok((config, generated))
}
