pub mod config;
pub mod entitlements;
pub mod protocol;

pub(crate) mod cli;
pub(crate) mod logging;

use std::path::Path;

pub use cli::{RunError, RunOptions};

/// Run the hook subcommand: read the context JSON from stdin, generate the
/// entitlements files, write the JSON report to stdout.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Library callers should use
/// [`entitlements::EntitlementsGenerator`] and [`config::Config`] directly.
pub fn run_hook(options: &RunOptions) -> Result<(), RunError> {
    cli::hook::run(options)
}

/// Run the generate subcommand against an explicit project root.
pub fn run_generate(project_root: &Path, options: &RunOptions) -> Result<(), RunError> {
    cli::generate::run(project_root, options)
}

/// Install the stderr logger used by the binary.
pub fn init_logging(verbose: bool) {
    logging::init(verbose)
}
