pub mod generate;
pub mod hook;

use std::path::{Path, PathBuf};

use crate::config::{check_project_name, Config, ConfigError};
use crate::entitlements::{EntitlementsError, EntitlementsGenerator};
use crate::protocol::HookOutput;

/// Settings shared by the `hook` and `generate` subcommands.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Explicit config path; defaults to `<projectRoot>/entitlements.kdl`.
    pub config: Option<PathBuf>,
    /// Overrides the `name` node of the config.
    pub project_name: Option<String>,
    /// Fail instead of replacing a malformed entitlements file.
    pub strict: bool,
}

/// Errors that abort a hook run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to read hook context from stdin: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("invalid hook context: {0}")]
    Context(#[source] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no project name: add `name \"…\"` to {} or pass --project-name", .0.display())]
    MissingProjectName(PathBuf),
    #[error(transparent)]
    Entitlements(#[from] EntitlementsError),
    #[error("failed to encode report: {0}")]
    Output(#[source] serde_json::Error),
}

/// Load the config, write both entitlements files, and build the report.
pub(crate) fn generate_for_project(
    project_root: &Path,
    options: &RunOptions,
) -> Result<HookOutput, RunError> {
    let config_path = options
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path(project_root));
    let config = load_config(&config_path, options.config.is_some())?;

    let project_name = match &options.project_name {
        Some(name) => {
            check_project_name(name).map_err(|problem| {
                ConfigError::ValidationError(format!("--project-name {problem}"))
            })?;
            name.clone()
        }
        None => config
            .project_name
            .ok_or(RunError::MissingProjectName(config_path))?,
    };

    tracing::debug!(
        root = %project_root.display(),
        project = %project_name,
        hosts = config.hosts.len(),
        "generating entitlements"
    );
    let report = EntitlementsGenerator::new(project_root, &project_name)
        .with_strict(options.strict)
        .generate(&config.hosts)?;
    Ok(HookOutput::written(project_name, report))
}

/// An explicitly requested config must exist; the default one may be absent.
fn load_config(path: &Path, explicit: bool) -> Result<Config, ConfigError> {
    match Config::load(path) {
        Err(ConfigError::NotFound(_)) if !explicit => {
            tracing::debug!(path = %path.display(), "no config file; using an empty host list");
            Ok(Config::default())
        }
        other => other,
    }
}

/// Serialize a HookOutput to JSON and print to stdout.
pub(crate) fn output_json(output: &HookOutput) -> Result<(), RunError> {
    let json = serde_json::to_string(output).map_err(RunError::Output)?;
    println!("{json}");
    Ok(())
}
