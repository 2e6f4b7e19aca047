//! Schevo CLI
//!
//! Command-line interface for schema evolution impact analysis

use clap::{Parser, Subcommand, ValueEnum};
use schevo_core::logging_facility::{self, Profile};
use schevo_core_types::RequestContext;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "schevo")]
#[command(about = "Schevo - Schema evolution impact analysis and deployment planning", long_about = None)]
struct Cli {
    /// Emit logs to stderr with the given profile (silent when omitted)
    #[arg(long, value_enum, global = true)]
    log_profile: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Dev,
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff, resolve impact and plan the deployment
    Analyze(commands::analyze::AnalyzeArgs),
    /// Show schema changes only
    Diff(commands::diff::DiffArgs),
    /// Print an example input document
    Example(commands::example::ExampleArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile.into());
    }

    let ctx = RequestContext::new();
    let span = tracing::info_span!("schevo", request_id = %ctx.request_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &ctx),
        Commands::Diff(args) => commands::diff::execute(args, &ctx),
        Commands::Example(args) => commands::example::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
