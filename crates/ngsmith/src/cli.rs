//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ngsmith_core::settings::Mode;

/// ngsmith - Angular schematic launcher
///
/// Composes and runs `ng generate` commands for the folder you point
/// it at, resolving the owning project from angular.json the same way
/// an editor context menu would.
#[derive(Parser, Debug)]
#[command(name = "ngsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a settings file (bypasses the user/workspace hierarchy)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an Angular artifact for a folder
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Persist the logging mode (debug or prod)
    Mode(ModeArgs),

    /// Show the resolved settings
    Config(ConfigArgs),

    /// Check the environment for the Angular toolchain
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(subcommand)]
    pub kind: GenerateCommands,
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    /// Generate a component
    #[command(visible_alias = "c")]
    Component(GenerateTargetArgs),

    /// Generate a module
    #[command(visible_alias = "m")]
    Module(ModuleTargetArgs),

    /// Generate a service
    #[command(visible_alias = "s")]
    Service(GenerateTargetArgs),

    /// Generate a directive
    #[command(visible_alias = "d")]
    Directive(GenerateTargetArgs),

    /// Generate a pipe
    #[command(visible_alias = "p")]
    Pipe(GenerateTargetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateTargetArgs {
    /// Folder the artifact is generated under
    #[arg(default_value = ".")]
    pub folder: Utf8PathBuf,

    /// Artifact name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Scan this directory for angular.json instead of walking up from FOLDER
    #[arg(long)]
    pub root: Option<Utf8PathBuf>,

    /// Print the composed command without running it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ModuleTargetArgs {
    #[command(flatten)]
    pub target: GenerateTargetArgs,

    /// Generate a routing module alongside (prompted for when omitted)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub routing: Option<bool>,
}

#[derive(Args, Debug)]
pub struct ModeArgs {
    /// Mode to persist
    #[arg(value_enum)]
    pub mode: ModeArg,
}

/// Mode values accepted by `ngsmith mode`
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    /// Debug-level diagnostics by default
    Debug,
    /// Normal logging
    Prod,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Debug => Mode::Debug,
            ModeArg::Prod => Mode::Prod,
        }
    }
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
