//! The settings evaluation pass.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use settler_util::errors::SettlerError;

use crate::plugin::{declared_plugins, PluginDeclaration};
use crate::project::{flutter_tools_gradle, included_projects, ROOT_PROJECT_NAME};
use crate::properties::PropertiesFile;
use crate::repository::{
    dependency_repositories, plugin_repositories, RepositoriesMode, Repository,
};
use crate::{FLUTTER_SDK_KEY, LOCAL_PROPERTIES_FILE};

/// The fully evaluated build settings for a host project.
///
/// Constructed once per invocation by [`Settings::evaluate`], handed to the
/// surrounding build system, and never mutated afterwards. There is no
/// ambient singleton; callers own the value.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Flutter SDK installation directory resolved from `local.properties`.
    pub sdk_path: String,
    /// The `flutter_tools` Gradle build included from the SDK.
    pub included_build: PathBuf,
    /// Ordered repositories for plugin resolution.
    pub plugin_repositories: Vec<Repository>,
    /// How settings repositories combine with project-declared ones.
    pub repositories_mode: RepositoriesMode,
    /// Ordered repositories for dependency resolution.
    pub dependency_repositories: Vec<Repository>,
    /// Fixed plugin declarations with versions and apply flags.
    pub plugins: Vec<PluginDeclaration>,
    /// Root project name.
    pub root_project: String,
    /// Subprojects included in the build graph.
    pub included_projects: Vec<String>,
}

impl Settings {
    /// Run the full settings evaluation for a host project directory.
    ///
    /// A single linear pass with one fatal failure branch: resolve the SDK
    /// path from `local.properties`, then assemble the repository lists,
    /// plugin declarations and project includes. No retries, no partial
    /// results.
    pub fn evaluate(project_dir: &Path) -> Result<Self, SettlerError> {
        let sdk_path = resolve_sdk_path(project_dir)?;
        debug!(sdk = %sdk_path, "resolved Flutter SDK");
        Ok(Self {
            included_build: flutter_tools_gradle(&sdk_path),
            plugin_repositories: plugin_repositories(),
            repositories_mode: RepositoriesMode::PreferSettings,
            dependency_repositories: dependency_repositories(&sdk_path),
            plugins: declared_plugins(),
            root_project: ROOT_PROJECT_NAME.to_string(),
            included_projects: included_projects(),
            sdk_path,
        })
    }
}

/// Resolve the Flutter SDK path from `local.properties` in `project_dir`.
///
/// Fails with [`SettlerError::MissingConfigurationKey`] when the file cannot
/// be read or the `flutter.sdk` key is absent or empty. The failure is
/// fatal; no default is substituted.
pub fn resolve_sdk_path(project_dir: &Path) -> Result<String, SettlerError> {
    let path = project_dir.join(LOCAL_PROPERTIES_FILE);
    let properties = PropertiesFile::load(&path).map_err(|err| {
        debug!(file = %path.display(), error = %err, "local properties unreadable");
        SettlerError::MissingConfigurationKey {
            key: FLUTTER_SDK_KEY.to_string(),
            path: path.clone(),
        }
    })?;
    Ok(properties.require(FLUTTER_SDK_KEY)?.to_string())
}
