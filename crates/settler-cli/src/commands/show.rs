use std::path::PathBuf;

use console::style;
use miette::Result;

use settler_core::settings::Settings;
use settler_util::errors::SettlerError;

pub fn exec(project_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let dir = super::resolve_project_dir(project_dir)?;
    let settings = Settings::evaluate(&dir)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&settings).map_err(|e| SettlerError::Generic {
                message: format!("Failed to serialize settings: {e}"),
            })?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{} {}", style("root project:").bold(), settings.root_project);
    for include in &settings.included_projects {
        println!("  include {include}");
    }
    println!("{} {}", style("flutter sdk:").bold(), settings.sdk_path);
    println!(
        "{} {}",
        style("included build:").bold(),
        settings.included_build.display()
    );

    println!("{}", style("plugin repositories:").bold());
    for repo in &settings.plugin_repositories {
        println!("  {}  {}", repo.name, repo.url);
    }

    println!(
        "{} ({})",
        style("dependency repositories:").bold(),
        settings.repositories_mode
    );
    for repo in &settings.dependency_repositories {
        println!("  {}  {}", repo.name, repo.url);
    }

    println!("{}", style("plugins:").bold());
    for plugin in &settings.plugins {
        let applied = if plugin.apply { "" } else { "  (apply false)" };
        println!("  {} {}{applied}", plugin.id, plugin.version);
    }

    Ok(())
}
