use std::path::PathBuf;

use miette::Result;

use settler_core::repository::{dependency_repositories, plugin_repositories};
use settler_core::settings::resolve_sdk_path;

pub fn exec(project_dir: Option<PathBuf>, plugin_management: bool) -> Result<()> {
    let repositories = if plugin_management {
        plugin_repositories()
    } else {
        let dir = super::resolve_project_dir(project_dir)?;
        // Tolerant lookup: without a resolvable SDK the list still renders,
        // it just omits the local engine repository.
        let sdk_path = resolve_sdk_path(&dir).unwrap_or_default();
        dependency_repositories(&sdk_path)
    };

    for repo in &repositories {
        println!("{}  {}", repo.name, repo.url);
    }

    Ok(())
}
