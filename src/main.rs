use clap::{Args, Parser, Subcommand};
use ios_entitlements_hook::RunOptions;
use miette::IntoDiagnostic;
use std::path::PathBuf;

/// Generate iOS associated-domains entitlements from a KDL project config.
#[derive(Debug, Parser)]
#[command(name = "ios-entitlements-hook", version, about)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a build lifecycle hook (reads context JSON on stdin, writes a report to stdout)
    Hook {
        #[command(flatten)]
        shared: SharedArgs,
    },
    /// Generate entitlements for a project root given on the command line
    Generate {
        /// Project root containing the `platforms/` directory
        #[arg(long)]
        project_root: PathBuf,

        #[command(flatten)]
        shared: SharedArgs,
    },
}

#[derive(Debug, Args)]
struct SharedArgs {
    /// Path to the KDL config file [default: <project root>/entitlements.kdl]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Project name, overriding the config's `name` node
    #[arg(long)]
    project_name: Option<String>,

    /// Fail instead of replacing a malformed entitlements file
    #[arg(long)]
    strict: bool,
}

impl From<SharedArgs> for RunOptions {
    fn from(args: SharedArgs) -> Self {
        RunOptions {
            config: args.config,
            project_name: args.project_name,
            strict: args.strict,
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    ios_entitlements_hook::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Hook { shared } => ios_entitlements_hook::run_hook(&shared.into()),
        Commands::Generate {
            project_root,
            shared,
        } => ios_entitlements_hook::run_generate(&project_root, &shared.into()),
    };
    result.into_diagnostic()
}
