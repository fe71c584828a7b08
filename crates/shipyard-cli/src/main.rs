use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Multi-platform build and packaging automation.
///
/// Shipyard reads an ordered list of build profiles from the project's
/// settings, drives the external build engine once per profile, and
/// packages each finished build into a platform-appropriate archive
/// (zip for Windows and web targets, gzip tarball for the rest).
///
/// EXAMPLES:
///     shipyard list                 Show the configured profiles
///     shipyard build 0              Build and package the first profile
///     shipyard build-defaults       Build every default profile
///     shipyard open                 Open the build output folder
///
/// ENVIRONMENT VARIABLES:
///     SHIPYARD_ENGINE   Path of the build engine binary
///     NO_COLOR          Set to disable colored output
#[derive(Parser)]
#[command(name = "shipyard")]
#[command(version)]
#[command(propagate_version = true)]
#[command(after_help = "For more information, see: https://github.com/shipyard-tools/shipyard")]
struct Cli {
    /// Project root directory
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configured build profiles in stored order
    ///
    /// EXAMPLES:
    ///     shipyard list
    ///     shipyard list --project ../game
    #[command(visible_alias = "ls")]
    List,

    /// Build and package one profile by its list index
    ///
    /// Runs the full pipeline for the profile at the given position in the
    /// stored list: capability check, stale-output cleanup, one engine
    /// build, packaging.
    ///
    /// EXAMPLES:
    ///     shipyard build 0
    ///     shipyard build 2 --engine /opt/engine/engine
    #[command(visible_alias = "b")]
    Build {
        /// Zero-based profile index, as shown by `shipyard list`
        index: usize,
        /// Build engine binary
        #[arg(long, env = "SHIPYARD_ENGINE")]
        engine: PathBuf,
        /// Directory holding the engine's installed platform modules
        /// (defaults to `PlaybackEngines` beside the engine binary)
        #[arg(long)]
        modules: Option<PathBuf>,
    },

    /// Build and package every profile marked as a default
    ///
    /// Profiles run sequentially in stored order. One profile's failure
    /// never aborts the rest; every outcome is reported and the exit code
    /// reflects whether all succeeded.
    ///
    /// EXAMPLES:
    ///     shipyard build-defaults
    ///     shipyard build-defaults --engine /opt/engine/engine
    #[command(name = "build-defaults", visible_alias = "defaults")]
    BuildDefaults {
        /// Build engine binary
        #[arg(long, env = "SHIPYARD_ENGINE")]
        engine: PathBuf,
        /// Directory holding the engine's installed platform modules
        #[arg(long)]
        modules: Option<PathBuf>,
    },

    /// Open the build output folder in the platform file manager
    Open,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => commands::list::run(&cli.project),
        Commands::Build {
            index,
            engine,
            modules,
        } => commands::build::run(&cli.project, index, &engine, modules.as_deref()),
        Commands::BuildDefaults { engine, modules } => {
            commands::defaults::run(&cli.project, &engine, modules.as_deref())
        }
        Commands::Open => commands::open::run(&cli.project),
    }
}
