use semver::Version;
use serde::Serialize;

/// A build plugin declaration: identifier, pinned version, and whether the
/// plugin is applied to the root build immediately or only made available
/// to subprojects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDeclaration {
    pub id: String,
    pub version: String,
    pub apply: bool,
}

impl PluginDeclaration {
    fn new(id: &str, version: &str, apply: bool) -> Self {
        Self {
            id: id.to_string(),
            version: version.to_string(),
            apply,
        }
    }

    /// The declared version parsed as semver, if it is well-formed.
    pub fn parsed_version(&self) -> Option<Version> {
        Version::parse(&self.version).ok()
    }
}

/// The fixed plugin set wired into the host build.
///
/// The AGP and Kotlin versions are pinned to what Flutter's current
/// toolchain is compatible with; only the plugin loader is applied
/// immediately.
pub fn declared_plugins() -> Vec<PluginDeclaration> {
    vec![
        PluginDeclaration::new("dev.flutter.flutter-plugin-loader", "1.0.0", true),
        PluginDeclaration::new("com.android.application", "8.7.3", false),
        PluginDeclaration::new("org.jetbrains.kotlin.android", "2.1.10", false),
    ]
}
