//! CLI argument definitions for settler.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "settler",
    version,
    about = "Evaluates the build settings of a Flutter Android host project",
    long_about = "Settler evaluates the settings of a Flutter-based Android host build: it \
                  resolves the Flutter SDK from local.properties, assembles the ordered \
                  artifact repository lists, and reports the declared plugins and included \
                  subprojects."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Host project directory (default: search upward from the CWD for local.properties)
    #[arg(short, long, global = true)]
    pub project_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the fully evaluated settings
    Show {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the ordered dependency-resolution repository list
    Repos {
        /// Show the plugin-management repositories instead
        #[arg(long)]
        plugin_management: bool,
    },

    /// Print the declared plugins with versions and apply flags
    Plugins,

    /// Print the root project name and included subprojects
    Projects,

    /// Print the resolved Flutter SDK path
    SdkPath,

    /// Evaluate the settings and verify the SDK paths exist on disk
    Check,
}

/// Parse CLI arguments from the process environment.
pub fn parse() -> Cli {
    Cli::parse()
}
