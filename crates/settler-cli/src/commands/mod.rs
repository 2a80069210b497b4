//! Command dispatch and handler modules.

mod check;
mod plugins;
mod projects;
mod repos;
mod sdk_path;
mod show;

use std::path::PathBuf;

use miette::Result;

use settler_core::LOCAL_PROPERTIES_FILE;
use settler_util::errors::SettlerError;
use settler_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show { json } => show::exec(cli.project_dir, json),
        Command::Repos { plugin_management } => repos::exec(cli.project_dir, plugin_management),
        Command::Plugins => plugins::exec(),
        Command::Projects => projects::exec(),
        Command::SdkPath => sdk_path::exec(cli.project_dir),
        Command::Check => check::exec(cli.project_dir),
    }
}

/// Locate the host project directory: an explicit `--project-dir`, or the
/// nearest ancestor of the CWD containing `local.properties`.
fn resolve_project_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let cwd = std::env::current_dir().map_err(SettlerError::Io)?;
    find_ancestor_with(&cwd, LOCAL_PROPERTIES_FILE).ok_or_else(|| {
        SettlerError::Settings {
            message: format!(
                "Could not find {LOCAL_PROPERTIES_FILE} in this directory or any parent"
            ),
        }
        .into()
    })
}
