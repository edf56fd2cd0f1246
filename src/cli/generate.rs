use std::path::Path;

use super::{generate_for_project, output_json, RunError, RunOptions};

/// Execute the generate subcommand for an explicit project root.
pub fn run(project_root: &Path, options: &RunOptions) -> Result<(), RunError> {
    let output = generate_for_project(project_root, options)?;
    output_json(&output)
}
