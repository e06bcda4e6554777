//! ngsmith CLI - Angular schematic launcher
//!
//! Main entry point for the ngsmith command-line interface.

mod cli;
mod commands;
mod output;
mod version;

use anyhow::Result;
use clap::Parser;
use ngsmith_core::settings::{self, Mode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet, settings::persisted_mode());

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.config.as_deref()).await,
        Commands::Mode(args) => commands::mode::run(args),
        Commands::Config(args) => commands::config::run(args, cli.config.as_deref()),
        Commands::Doctor => commands::doctor::run().await,
        Commands::Completions(args) => commands::completions::run(args),
        Commands::Version(args) => commands::version::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
///
/// The persisted debug mode raises the default level without flags;
/// explicit -v/-q always win.
fn init_tracing(verbose: u8, quiet: bool, mode: Mode) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match (verbose, mode) {
            (0, Mode::Prod) => EnvFilter::new("info"),
            (0, Mode::Debug) => EnvFilter::new("debug"),
            (1, _) => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
