//! Artifact repository descriptors: fixed URLs, ordered lists, resolution mode.

use serde::Serialize;

/// Google's Maven repository.
pub const GOOGLE_MAVEN_URL: &str = "https://maven.google.com";

/// Maven Central base URL.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// Gradle Plugin Portal Maven mirror.
pub const GRADLE_PLUGIN_PORTAL_URL: &str = "https://plugins.gradle.org/m2";

/// Flutter engine artifacts (embedding, split APKs, etc.).
pub const FLUTTER_STORAGE_URL: &str = "https://storage.googleapis.com/download.flutter.io";

/// Prebuilt Android engine artifacts, relative to the Flutter SDK root.
const ENGINE_ARTIFACTS_DIR: &str = "bin/cache/artifacts/engine/android";

/// A named artifact repository. Repositories are tried in declared order;
/// the first one holding an artifact wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

impl Repository {
    fn new(name: &str, url: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            url: url.into(),
        }
    }

    /// Construct the Google Maven repository.
    pub fn google() -> Self {
        Self::new("google", GOOGLE_MAVEN_URL)
    }

    /// Construct the default Maven Central repository.
    pub fn maven_central() -> Self {
        Self::new("maven-central", MAVEN_CENTRAL_URL)
    }

    /// Construct the Gradle Plugin Portal repository.
    pub fn gradle_plugin_portal() -> Self {
        Self::new("gradle-plugin-portal", GRADLE_PLUGIN_PORTAL_URL)
    }

    /// Construct the hosted Flutter engine artifact repository.
    pub fn flutter_storage() -> Self {
        Self::new("flutter-storage", FLUTTER_STORAGE_URL)
    }

    /// Local engine repository inside the Flutter SDK (covers debug artifacts).
    pub fn local_engine(sdk_path: &str) -> Self {
        Self::new(
            "flutter-local-engine",
            format!("{}/{ENGINE_ARTIFACTS_DIR}", sdk_path.trim_end_matches('/')),
        )
    }
}

/// How settings-level repositories interact with ones added by individual
/// projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoriesMode {
    PreferProject,
    PreferSettings,
    FailOnProjectRepos,
}

impl std::fmt::Display for RepositoriesMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::PreferProject => "prefer-project",
            Self::PreferSettings => "prefer-settings",
            Self::FailOnProjectRepos => "fail-on-project-repos",
        })
    }
}

/// Repositories consulted when resolving build plugins. Order matters.
pub fn plugin_repositories() -> Vec<Repository> {
    vec![
        Repository::google(),
        Repository::maven_central(),
        Repository::gradle_plugin_portal(),
    ]
}

/// Repositories consulted when resolving project dependencies.
///
/// Order matters. The local engine repository is appended only when
/// `sdk_path` is non-empty; an unresolved SDK leaves the list at the three
/// fixed public entries.
pub fn dependency_repositories(sdk_path: &str) -> Vec<Repository> {
    let mut repositories = vec![
        Repository::google(),
        Repository::maven_central(),
        Repository::flutter_storage(),
    ];
    if !sdk_path.is_empty() {
        repositories.push(Repository::local_engine(sdk_path));
    }
    repositories
}
