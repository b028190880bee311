//! strata's main application entry point.
//! Parses arguments, resolves the configuration and generates the scaffold.

use strata::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::scaffold,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration file, or prompts for name and description
/// 2. Validates the configuration (nothing is written before this succeeds)
/// 3. Creates the base path
/// 4. Creates the directories, then writes the files
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();

    let config_file = args.config_file.as_deref();
    let (config, generated) = scaffold(config_file, &args.path, &prompter, &renderer)?;

    println!(
        "Project '{}' generated successfully ({} directories, {} files).",
        config.project_name,
        generated.directories.len(),
        generated.files.len()
    );
    Ok(())
}
