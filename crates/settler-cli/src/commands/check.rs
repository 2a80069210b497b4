use std::path::{Path, PathBuf};

use miette::Result;

use settler_core::settings::Settings;
use settler_util::errors::SettlerError;

/// Evaluate the settings and verify that the resolved SDK directory and the
/// included `flutter_tools` build exist on disk. Evaluation itself never
/// touches the filesystem beyond `local.properties`; this command is the
/// explicit opt-in.
pub fn exec(project_dir: Option<PathBuf>) -> Result<()> {
    let dir = super::resolve_project_dir(project_dir)?;
    let settings = Settings::evaluate(&dir)?;

    if !Path::new(&settings.sdk_path).is_dir() {
        return Err(SettlerError::Settings {
            message: format!("Flutter SDK directory does not exist: {}", settings.sdk_path),
        }
        .into());
    }
    if !settings.included_build.is_dir() {
        return Err(SettlerError::Settings {
            message: format!(
                "flutter_tools Gradle build not found: {}",
                settings.included_build.display()
            ),
        }
        .into());
    }

    println!(
        "Settings OK: {} dependency repositories, {} plugins, {} subproject(s)",
        settings.dependency_repositories.len(),
        settings.plugins.len(),
        settings.included_projects.len()
    );
    Ok(())
}
