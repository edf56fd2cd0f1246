use std::io::Read;

use super::{generate_for_project, output_json, RunError, RunOptions};
use crate::protocol::{HookContext, HookOutput};

/// Execute the hook subcommand: read the context JSON from stdin, generate,
/// write the JSON report to stdout.
///
/// Builds that do not include the iOS platform are skipped without touching
/// the filesystem.
pub fn run(options: &RunOptions) -> Result<(), RunError> {
    let context = read_context(std::io::stdin().lock())?;
    output_json(&execute(&context, options)?)
}

fn read_context(mut reader: impl Read) -> Result<HookContext, RunError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    serde_json::from_str(&input).map_err(RunError::Context)
}

fn execute(context: &HookContext, options: &RunOptions) -> Result<HookOutput, RunError> {
    if !context.targets_ios() {
        tracing::info!(platforms = ?context.opts.platforms, "build does not target ios; skipping");
        return Ok(HookOutput::skipped(format!(
            "platforms {:?} do not include ios",
            context.opts.platforms
        )));
    }
    if let Some(hook) = &context.hook {
        tracing::debug!(%hook, "running entitlements hook");
    }
    generate_for_project(&context.opts.project_root, options)
}
