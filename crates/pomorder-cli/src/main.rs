//! pomorder CLI
//!
//! Command-line interface for pomorder ordering checks

use clap::{Parser, Subcommand, ValueEnum};
use pomorder_core::errors::ExError;
use pomorder_core::logging_facility::{self, Profile};
use pomorder_core_types::RunId;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "pomorder")]
#[command(about = "pomorder - Pedantic ordering checks with side-by-side diffs", long_about = None)]
struct Cli {
    /// Log output on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogProfile::Off)]
    log_profile: LogProfile,

    /// Output format on stdout
    #[arg(long, global = true, value_enum, default_value_t = commands::OutputFormat::Text)]
    format: commands::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogProfile {
    Off,
    Dev,
    Prod,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two line files side by side
    Diff(commands::diff::DiffArgs),
    /// Check a list of POM sections against the canonical order
    Sections(commands::sections::SectionsArgs),
    /// Check dependency versions and exclusions
    Deps(commands::deps::DepsArgs),
    /// Check plugin configuration and where plugins are managed
    Plugins(commands::plugins::PluginsArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Diff(_) => "diff",
            Commands::Sections(_) => "sections",
            Commands::Deps(_) => "deps",
            Commands::Plugins(_) => "plugins",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.log_profile {
        LogProfile::Off => {}
        LogProfile::Dev => logging_facility::init(Profile::Development),
        LogProfile::Prod => logging_facility::init(Profile::Production),
    }

    let run_id = RunId::new();
    let span = tracing::info_span!("pomorder", run_id = %run_id);
    let _guard = span.enter();

    let op = cli.command.name();
    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, cli.format),
        Commands::Sections(args) => commands::sections::execute(args, cli.format),
        Commands::Deps(args) => commands::deps::execute(args, cli.format),
        Commands::Plugins(args) => commands::plugins::execute(args, cli.format),
    };

    match result {
        Ok(commands::Outcome::Clean) => {}
        Ok(commands::Outcome::Violations) => std::process::exit(1),
        Err(e) => {
            let ex_err = ExError::from(e).with_op(op).with_run_id(run_id);
            eprintln!("Error: {}", ex_err);
            std::process::exit(2);
        }
    }
}
